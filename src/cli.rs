use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::Parser;

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
tfam version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   terminal .fasta mutator: apply one action to a .fasta file
   actions: upper, lower, remove, keep, renumerate (rename), N50 (n50), len";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    arg_required_else_help = true,
    styles = STYLES
)]
pub struct Cli {
    /// mutator applied to the data, one of:
    ///   upper       all sequence uppercase
    ///   lower       all sequence lowercase
    ///   remove      remove the entries named in --list
    ///   keep        keep only the entries named in --list
    ///   renumerate  rename entries to <prefix>1, <prefix>2, ... (alias: rename)
    ///   N50         print the N50 of the file instead of the entries (alias: n50)
    ///   len         print the length of every entry instead of the entries
    #[arg(short, long, verbatim_doc_comment)]
    pub action: String,

    /// the input .fasta file (standard input if not set)
    #[arg(short, long = "in")]
    pub input: Option<String>,

    /// the output .fasta file (standard output if not set)
    #[arg(short, long = "out")]
    pub output: Option<String>,

    /// list of entry names, one per line, used by `remove` and `keep`
    #[arg(short, long)]
    pub list: Option<String>,

    /// name prefix used by `renumerate`
    #[arg(short, long, default_value = crate::actions::DEFAULT_NAME_PREFIX)]
    pub prefix: String,
}
