use crate::param::Parameter;

fn value_label(parameter: &dyn Parameter) -> String {
    let label = parameter.option_label();

    if label.is_empty() {
        "<value>".to_string()
    } else {
        label.to_string()
    }
}

fn option_synopsis(parameter: &dyn Parameter) -> String {
    let mut synopsis = format!("-{}", parameter.tag());

    // Boolean-like options take no value token.
    if parameter.no_value_default().is_none() {
        synopsis.push(' ');
        synopsis.push_str(&value_label(parameter));
    }

    if parameter.is_optional() {
        format!("[{synopsis}]")
    } else {
        synopsis
    }
}

fn argument_synopsis(parameter: &dyn Parameter) -> String {
    let mut synopsis = if parameter.is_optional() {
        format!("[{}]", parameter.tag())
    } else {
        parameter.tag().to_string()
    };

    if parameter.is_multi_valued() {
        synopsis.push_str("...");
    }

    synopsis
}

fn visible<'r, 'p: 'r>(
    parameters: &'r [&'p mut (dyn Parameter + 'p)],
) -> impl Iterator<Item = &'r (dyn Parameter + 'p)> + use<'r, 'p> {
    parameters
        .iter()
        .map(|parameter| &**parameter)
        .filter(|parameter| !parameter.is_hidden())
}

/// Render plain usage text: a synopsis line, the optional program summary,
/// and a description entry per visible parameter.
pub(crate) fn render(
    program: &str,
    about: Option<&str>,
    options: &[&mut dyn Parameter],
    arguments: &[&mut dyn Parameter],
) -> String {
    let mut text = format!("Usage: {program}");

    for parameter in visible(options) {
        text.push(' ');
        text.push_str(&option_synopsis(parameter));
    }

    for parameter in visible(arguments) {
        text.push(' ');
        text.push_str(&argument_synopsis(parameter));
    }

    text.push('\n');

    if let Some(about) = about {
        text.push('\n');
        text.push_str(about);
        text.push('\n');
    }

    if visible(options).next().is_some() || visible(arguments).next().is_some() {
        text.push_str("\nwhere:\n");
    }

    for parameter in visible(options) {
        let mut heading = format!("-{}", parameter.tag());

        if parameter.no_value_default().is_none() {
            heading.push(' ');
            heading.push_str(&value_label(parameter));
        }

        if !parameter.is_optional() {
            heading.push_str(" (required)");
        }

        text.push_str(&format!("  {heading}\n      {desc}\n", desc = parameter.desc()));
    }

    for parameter in visible(arguments) {
        let mut heading = parameter.tag().to_string();

        if parameter.is_optional() {
            heading.push_str(" (optional)");
        }

        text.push_str(&format!("  {heading}\n      {desc}\n", desc = parameter.desc()));
    }

    text
}
