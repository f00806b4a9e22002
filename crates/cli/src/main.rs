use anyhow::Result;
use argmatch::{Arg, ArgMatches, Command, arg};
use tracing_subscriber::{EnvFilter, fmt};

fn build_cli() -> Command {
    Command::new("media", "Media toolbox built on the argmatch engine")
        .arg(arg("-v --verbose").about("Enable verbose mode"))
        .subcommand(
            Command::new("convert", "Convert a media file")
                .arg(
                    Arg::option("fps")
                        .short_alias('f')
                        .about("Set frames per second")
                        .value_name("fps")
                        .default_value(60),
                )
                .arg(
                    Arg::option("format")
                        .about("Set output format")
                        .value_name("format")
                        .default_value("mp4"),
                )
                .arg(arg("<input>").about("File to convert"))
                .arg(arg("[output]").about("Destination path")),
        )
        .subcommand(
            Command::new("probe", "Inspect media files").arg(
                Arg::positional("files")
                    .multiple(true)
                    .required(true)
                    .about("Files to inspect"),
            ),
        )
}

fn main() -> Result<()> {
    init_tracing();

    let cli = build_cli();
    let matches = match cli.get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    if help_requested(&matches) {
        // Help text was already printed by get_matches.
        return Ok(());
    }
    if matches.get_flag("verbose") {
        tracing::debug!("verbose mode enabled");
    }

    match matches.subcommand() {
        Some(("convert", sub)) => convert(sub),
        Some(("probe", sub)) => probe(sub),
        _ => {
            cli.print_help();
            Ok(())
        }
    }
}

fn convert(matches: &ArgMatches) -> Result<()> {
    tracing::debug!("executing convert command");

    let fps: Option<u32> = matches.get_one_as("fps")?;
    let format = matches.get_one("format").unwrap_or("mp4");
    let input = matches.get_one("input").unwrap_or_default();

    match matches.get_one("output") {
        Some(output) => println!(
            "would convert {input} -> {output} ({format}, {} fps)",
            fps.unwrap_or(60)
        ),
        None => println!(
            "would convert {input} in place ({format}, {} fps)",
            fps.unwrap_or(60)
        ),
    }
    Ok(())
}

fn probe(matches: &ArgMatches) -> Result<()> {
    tracing::debug!("executing probe command");

    for file in matches.get_many("files") {
        println!("probe: {file}");
    }
    Ok(())
}

fn help_requested(matches: &ArgMatches) -> bool {
    matches.get_flag("help") || matches.subcommand().is_some_and(|(_, sub)| help_requested(sub))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
