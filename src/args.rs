#[derive(clap::Parser)]
#[clap(name = "thumb memory dump annotator")]
pub struct Cli {
    /// Path to the raw memory dump you want annotated
    pub dump: std::path::PathBuf,

    /// Address of the first byte, used for the printed offsets
    #[clap(short = 'a', long, value_parser = parse_hex, default_value = "0")]
    pub base: u32,

    /// Also print each bit pattern in binary and hex
    #[clap(short, long)]
    pub bits: bool,

    /// Disable colored output
    #[clap(long)]
    pub no_color: bool,
}

fn parse_hex(arg: &str) -> Result<u32, String> {
    let digits = arg.trim_start_matches("0x");
    u32::from_str_radix(digits, 16).map_err(|err| err.to_string())
}

impl Cli {
    pub fn new() -> Self {
        use clap::Parser;

        let args = Self::parse();
        assert!(args.dump.is_file(), "Path to dump doesn't exist");

        args
    }
}
