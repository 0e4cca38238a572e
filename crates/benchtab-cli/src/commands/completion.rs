// benchtab - Benchmark report tables
//
// Copyright (c) 2025 benchtab contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shell completion generation - Tab completion for various shells

use clap::Command;
use clap_complete::{generate, Shell};
use std::io;

/// Write the completion script for `shell` to stdout.
pub fn generate_completion(shell: Shell, cmd: &mut Command) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, &mut io::stdout());
}

/// How to install the completion script for `shell`.
pub fn print_installation_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r#"# Bash completion installation:

# For current session only:
eval "$(benchtab completion bash)"

# Or save to completions directory:
benchtab completion bash > ~/.local/share/bash-completion/completions/benchtab
"#
        .to_string(),
        Shell::Zsh => r#"# Zsh completion installation:

# Save to a directory in $fpath:
benchtab completion zsh > ~/.zsh/completions/_benchtab
"#
        .to_string(),
        Shell::Fish => r#"# Fish completion installation:

benchtab completion fish > ~/.config/fish/completions/benchtab.fish
"#
        .to_string(),
        Shell::PowerShell => r#"# PowerShell completion installation:

# Add this line to your profile ($PROFILE):
benchtab completion powershell | Out-String | Invoke-Expression
"#
        .to_string(),
        other => format!(
            "# {} completion installation:\n\neval (benchtab completion {})\n",
            other, other
        ),
    }
}
