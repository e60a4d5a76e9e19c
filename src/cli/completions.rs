use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    curated-packages completions bash > ~/.bash_completion.d/curated-packages\n\n\
                  Generate zsh completions:\n    curated-packages completions zsh > ~/.zfunc/_curated-packages\n\n\
                  Generate fish completions:\n    curated-packages completions fish > ~/.config/fish/completions/curated-packages.fish\n\n\
                  Generate PowerShell completions:\n    curated-packages completions powershell")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
