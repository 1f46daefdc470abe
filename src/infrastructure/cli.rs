use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 60.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        help = "Treat the terminal as a mobile device (locks background scrolling while paying)"
    )]
    pub mobile: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() -> color_eyre::Result<()> {
        let cli = Cli::try_parse_from(["sensdeck"])?;
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 60.0);
        assert!(!cli.mobile);
        Ok(())
    }

    #[test]
    fn test_flags() -> color_eyre::Result<()> {
        let cli = Cli::try_parse_from(["sensdeck", "--mobile", "-t", "2", "--frame-rate", "30"])?;
        assert_eq!(cli.tick_rate, 2.0);
        assert_eq!(cli.frame_rate, 30.0);
        assert!(cli.mobile);
        Ok(())
    }
}
