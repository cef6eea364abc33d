use chrono::NaiveDate;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Initial date of the first field, as YYYY-MM-DD
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// strftime-style display format, e.g. "%d %b %Y".
    /// Overrides the config file.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Text shown while a field has no date
    #[arg(short, long)]
    pub placeholder: Option<String>,

    /// Names of the fields on the form
    #[arg(long, value_delimiter = ',', default_values_t = [String::from("Start"), String::from("End")])]
    pub fields: Vec<String>,
}

pub fn parse_args() -> Args {
    Args::parse()
}
