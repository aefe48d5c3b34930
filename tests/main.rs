use argot::{
    BooleanParam, CommandLine, DateParam, FileAttributes, FileParam, IntParam, ParseError,
    StringParam, TimeParam,
};

#[test]
fn typical_invocation() {
    let mut verbose = BooleanParam::new("verbose", "enable verbose output").unwrap();
    let mut count = IntParam::new("count", "the number of repetitions")
        .unwrap()
        .min(1)
        .unwrap()
        .max(10)
        .unwrap();
    let mut target = StringParam::new("target", "the target file")
        .unwrap()
        .required();
    let mut sources = StringParam::new("sources", "the source files")
        .unwrap()
        .multi_valued();

    let mut command_line = CommandLine::new("copier").about("copies sources into a target");
    command_line.add_option(&mut verbose).unwrap();
    command_line.add_option(&mut count).unwrap();
    command_line.add_argument(&mut target).unwrap();
    command_line.add_argument(&mut sources).unwrap();
    command_line
        .parse_tokens(&["-verbose", "-count=5", "out.txt", "a.txt", "b.txt"])
        .unwrap();
    drop(command_line);

    assert!(verbose.is_true());
    assert_eq!(count.value(), Some(&5));
    assert_eq!(target.value().map(String::as_str), Some("out.txt"));
    assert_eq!(sources.values(), &["a.txt".to_string(), "b.txt".to_string()]);
}

#[test]
fn missing_required_names_the_tag() {
    let mut target = StringParam::new("target", "the target file")
        .unwrap()
        .required();
    let mut command_line = CommandLine::new("copier");
    command_line.add_argument(&mut target).unwrap();

    let error = command_line.parse_tokens(&[]).unwrap_err();

    assert_eq!(error, ParseError::MissingRequired("target".to_string()));
    assert!(error.to_string().contains("target"));
}

#[test]
fn unrecognized_option_stops_before_positionals() {
    let mut target = StringParam::new("target", "the target file").unwrap();
    let mut command_line = CommandLine::new("copier");
    command_line.add_argument(&mut target).unwrap();

    let error = command_line.parse_tokens(&["-bad", "x"]).unwrap_err();
    drop(command_line);

    assert_eq!(error, ParseError::UnrecognizedOption("-bad".to_string()));
    assert!(!target.is_set());
}

#[test]
fn out_of_range_option_value() {
    let mut count = IntParam::new("count", "the number of repetitions")
        .unwrap()
        .min(1)
        .unwrap()
        .max(10)
        .unwrap();
    let mut command_line = CommandLine::new("repeater");
    command_line.add_option(&mut count).unwrap();

    let error = command_line.parse_tokens(&["-count", "11"]).unwrap_err();

    assert!(error.to_string().contains("between 1 and 10"));
}

#[test]
fn help_style_escape_hatch() {
    let mut help = BooleanParam::new("help", "print this usage text")
        .unwrap()
        .ignore_required();
    let mut target = StringParam::new("target", "the target file")
        .unwrap()
        .required();

    let mut command_line = CommandLine::new("copier");
    command_line.add_option(&mut help).unwrap();
    command_line.add_argument(&mut target).unwrap();
    command_line.parse_tokens(&["--help"]).unwrap();

    let usage = command_line.usage();
    drop(command_line);

    assert!(help.is_true());
    assert!(!target.is_set());
    assert!(usage.starts_with("Usage: copier"));
    assert!(usage.contains("print this usage text"));
}

#[test]
fn date_and_time_options() {
    let mut start = DateParam::new("start", "the start of the report").unwrap();
    let mut cutoff = TimeParam::new("cutoff", "the daily cutoff").unwrap();

    let mut command_line = CommandLine::new("reporter");
    command_line.add_option(&mut start).unwrap();
    command_line.add_option(&mut cutoff).unwrap();
    command_line
        .parse_tokens(&["-start", "07/14/24", "-cutoff", "17:30"])
        .unwrap();
    drop(command_line);

    let start_value = start.value().unwrap();
    assert_eq!(start_value.format("%m/%d/%y %H:%M").to_string(), "07/14/24 00:00");
    let cutoff_value = cutoff.value().unwrap();
    assert_eq!(cutoff_value.format("%H:%M:%S%.3f").to_string(), "17:30:00.000");
}

#[test]
fn file_argument_attributes() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let token = file.path().display().to_string();
    let mut input = FileParam::new(
        "input",
        "the input file",
        FileAttributes::IS_FILE | FileAttributes::IS_READABLE,
    )
    .unwrap()
    .required();

    let mut command_line = CommandLine::new("reader");
    command_line.add_argument(&mut input).unwrap();
    command_line.parse_tokens(&[&token]).unwrap();
    drop(command_line);

    assert_eq!(input.value().map(|path| path.display().to_string()), Some(token));
}

#[test]
fn file_argument_attribute_failure() {
    let mut input = FileParam::new("input", "the input file", FileAttributes::EXISTS)
        .unwrap()
        .required();

    let mut command_line = CommandLine::new("reader");
    command_line.add_argument(&mut input).unwrap();

    let error = command_line
        .parse_tokens(&["/no/such/path/anywhere"])
        .unwrap_err();

    assert!(error.to_string().contains("must exist"));
}

#[test]
fn acceptable_values_restrict_string_tokens() {
    let mut level = StringParam::new("level", "the logging level")
        .unwrap()
        .acceptable_values(vec![
            "debug".to_string(),
            "info".to_string(),
            "error".to_string(),
        ]);

    let mut command_line = CommandLine::new("logger");
    command_line.add_option(&mut level).unwrap();

    let error = command_line.parse_tokens(&["-level", "chatty"]).unwrap_err();
    drop(command_line);

    assert!(error.to_string().contains("'chatty'"));
    assert!(error.to_string().contains("debug"));
    assert!(!level.is_set());
}
