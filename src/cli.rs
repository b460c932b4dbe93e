use crate::error::Error;
use crate::transform::TransformKind;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const INPUT_FILE_PROMPT: &str =
    "Enter the image filename (e.g., barbara.bmp, caman.tif, Lena-Image.png): ";

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_mode_argument(command);
        let command = Self::register_parameters_argument(command);
        let command = Self::register_repetitions_argument(command);
        Self::register_results_directory_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_mode_argument(command: Command) -> Command {
        command.arg(Self::create_mode_argument())
    }

    fn register_parameters_argument(command: Command) -> Command {
        command.arg(Self::create_parameters_argument())
    }

    fn register_repetitions_argument(command: Command) -> Command {
        command.arg(Self::create_repetitions_argument())
    }

    fn register_results_directory_argument(command: Command) -> Command {
        command.arg(Self::create_results_directory_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the grayscale input image, asked for interactively when omitted")
            .value_parser(value_parser!(PathBuf))
            .required(false)
    }

    fn create_mode_argument() -> Arg {
        arg!(mode: -m --mode <MODE> "Transformation to sweep")
            .default_value("quantization")
            .value_parser(value_parser!(TransformKind))
    }

    fn create_parameters_argument() -> Arg {
        arg!(parameters: -p --parameters <VALUES> "Comma separated bit depths or reduction factors")
            .required(false)
            .value_delimiter(',')
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i64))
    }

    fn create_repetitions_argument() -> Arg {
        arg!(repetitions: -r --repetitions <COUNT> "Number of timed runs per parameter")
            .required(false)
            .value_parser(value_parser!(u32))
    }

    fn create_results_directory_argument() -> Arg {
        arg!(results_directory: -o --results_directory <DIRECTORY> "Directory receiving the report images")
            .required(false)
            .value_parser(value_parser!(PathBuf))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        let mode = Self::extract_mode_argument(matches);
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            mode,
            parameters: Self::extract_parameters_argument(matches)
                .unwrap_or_else(|| mode.default_parameters().to_vec()),
            repetitions: Self::extract_repetitions_argument(matches)
                .unwrap_or_else(|| mode.default_repetitions()),
            results_directory: Self::extract_results_directory_argument(matches)
                .unwrap_or_else(|| PathBuf::from(mode.results_directory())),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("input_file").cloned()
    }

    fn extract_mode_argument(matches: &ArgMatches) -> TransformKind {
        matches
            .get_one::<TransformKind>("mode")
            .expect("Mode must be provided, but was unset.")
            .to_owned()
    }

    fn extract_parameters_argument(matches: &ArgMatches) -> Option<Vec<i64>> {
        matches
            .get_many::<i64>("parameters")
            .map(|values| values.copied().collect())
    }

    fn extract_repetitions_argument(matches: &ArgMatches) -> Option<u32> {
        matches.get_one::<u32>("repetitions").copied()
    }

    fn extract_results_directory_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("results_directory").cloned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Asks for the image filename on `writer` and reads one line from `reader`.
pub fn prompt_for_input_file<R, W>(reader: &mut R, writer: &mut W) -> crate::Result<PathBuf>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{}", INPUT_FILE_PROMPT).map_err(Error::UnableToReadFromStdin)?;
    writer.flush().map_err(Error::UnableToReadFromStdin)?;
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(Error::UnableToReadFromStdin)?;
    Ok(PathBuf::from(line.trim()))
}
