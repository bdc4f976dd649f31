use clap::{arg,crate_version,Command};
use meteolzw::lzw;

const RCH: &str = "unreachable was reached";

fn main() -> Result<(),Box<dyn std::error::Error>>
{
    env_logger::init();

    let long_help =
"Examples:
---------
Compress:      `meteolzw compress -i my_expanded -o my_compressed`
Expand:        `meteolzw expand -i my_compressed -o my_expanded`";

    let mut main_cmd = Command::new("meteolzw")
        .about("Compress and expand with the variable-width adaptive LZW codec")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(Command::new("compress")
        .arg(arg!(-i --input <PATH> "input path").required(true))
        .arg(arg!(-o --output <PATH> "output path").required(true))
        .arg(arg!(-v --verbose "print a marker on every code-width bump"))
        .about("compress a file"));

    main_cmd = main_cmd.subcommand(Command::new("expand")
        .arg(arg!(-i --input <PATH> "input path").required(true))
        .arg(arg!(-o --output <PATH> "output path").required(true))
        .about("expand a file"));

    let matches = main_cmd.get_matches();

    if let Some(cmd) = matches.subcommand_matches("compress") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_out = cmd.get_one::<String>("output").expect(RCH);
        if cmd.get_flag("verbose") {
            lzw::set_verbose(1);
        }
        let dat = std::fs::read(path_in)?;
        let compressed = lzw::compress_to_vec(&dat, dat.len() + 64);
        std::fs::write(path_out,compressed)?;
    }

    if let Some(cmd) = matches.subcommand_matches("expand") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_out = cmd.get_one::<String>("output").expect(RCH);
        let dat = std::fs::read(path_in)?;
        // The expanded size is not stored in the stream itself (matching
        // the legacy format, which carries no length header); size the
        // first attempt generously and let `expand_to_vec` grow on
        // `Error::OutputExhausted`.
        let expanded = lzw::expand_to_vec(&dat, dat.len() * 4 + 64)?;
        std::fs::write(path_out,expanded)?;
    }

    Ok(())
}
