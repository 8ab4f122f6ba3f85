use crate::globals;
use clap::ArgAction;
use shiftcrack::util::Result;

#[macro_export]
macro_rules! arg {
    ($a:expr,$b:expr,$c:expr,$d:expr) => {
        args::ArgSpec { name: $a, short: $b, value: $c, help: $d, values: &[], positional: false }
    };
}

#[macro_export]
macro_rules! arg_enum {
    ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr) => {
        args::ArgSpec { name: $a, short: $b, value: $c, help: $d, values: $e, positional: false }
    };
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FileCount {
    Zero,
    One,
    Many,
}

#[derive(Debug)]
pub struct ProgSpec {
    pub help: &'static str,
    pub files: FileCount,
    pub author: &'static str,
    pub version: &'static str,
}

/// return current version string
pub fn version() -> String {
    format!(
        "{}.{}.{}{}",
        env!("CARGO_PKG_VERSION_MAJOR"),
        env!("CARGO_PKG_VERSION_MINOR"),
        env!("CARGO_PKG_VERSION_PATCH"),
        option_env!("CARGO_PKG_VERSION_PRE").unwrap_or("")
    )
}
impl ProgSpec {
    pub fn new(help: &'static str, files: FileCount) -> Self {
        Self { help, files, author: "avjewe@gmail.com", version: env!("CARGO_PKG_VERSION") }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    pub name: &'static str,
    pub short: &'static str,
    pub value: &'static str,
    pub help: &'static str,
    pub values: &'static [&'static str],
    pub positional: bool,
}

#[derive(Debug)]
pub struct ArgValue {
    pub name: String,
    pub value: String,
    pub index: usize,
}

impl ArgValue {
    pub fn new(name: &str, value: &str, index: usize) -> Self {
        Self { name: name.to_string(), value: value.to_string(), index }
    }
}

pub fn add_arg(a: clap::Command, x: &ArgSpec, hide_help: bool) -> clap::Command {
    let mut b = clap::Arg::new(x.name);
    if x.positional {
        b = b.help(x.help).required(true)
    } else {
        if let Some(c) = x.short.chars().next() {
            b = b.short(c);
        }
        b = b.long(x.name).help(x.help);
        if x.value.is_empty() {
            b = b.action(ArgAction::Append).num_args(0).default_missing_value("present");
        } else {
            b = b.value_name(x.value).action(ArgAction::Append).allow_hyphen_values(true);
        }

        if !x.values.is_empty() {
            b = b.value_parser(clap::builder::PossibleValuesParser::new(x.values));
        }
    }
    b = b.hide_long_help(hide_help);
    a.arg(b)
}

pub fn get_arg(m: &clap::ArgMatches, x: &ArgSpec, v: &mut Vec<ArgValue>) {
    let Some(arg) = m.get_many::<String>(x.name) else {
        return;
    };
    let Some(ind) = m.indices_of(x.name) else {
        return;
    };
    for (val, i) in arg.zip(ind) {
        let val = if x.value.is_empty() { "" } else { val.as_str() };
        v.push(ArgValue::new(x.name, val, i));
    }
}

/// Parse the command line for one subcommand.
/// Global args are consumed into `glob`, the rest are returned in command line order,
/// along with the input files. `FileCount::Many` with no files means "-".
pub fn parse(
    prog: &ProgSpec,
    spec: &[ArgSpec],
    argv: &[String],
    glob: &mut globals::Settings,
) -> Result<(Vec<ArgValue>, Vec<String>)> {
    let mut a = clap::Command::new("shiftcrack")
        .version(prog.version)
        .author(prog.author)
        .about(prog.help);

    for x in spec {
        a = add_arg(a, x, false);
    }
    for x in globals::global_args() {
        a = add_arg(a, x, true);
    }
    match prog.files {
        FileCount::Zero => {}
        FileCount::One => {
            a = a.arg(clap::Arg::new("input_files"));
        }
        FileCount::Many => {
            a = a.arg(clap::Arg::new("input_files").action(ArgAction::Append));
        }
    }
    let m = a.get_matches_from(argv);
    let mut v: Vec<ArgValue> = Vec::new();
    for x in globals::global_args() {
        get_arg(&m, x, &mut v);
    }
    glob.consume(&v)?;
    glob.init_logging();
    v.clear();
    for x in spec {
        get_arg(&m, x, &mut v);
    }
    let mut files: Vec<String> = Vec::new();
    if prog.files != FileCount::Zero {
        if let Some(arg) = m.get_many::<String>("input_files") {
            for f in arg {
                files.push(f.to_string());
            }
        }
        if files.is_empty() {
            files.push("-".to_string());
        }
    }
    v.sort_by(|a, b| a.index.cmp(&b.index));
    Ok((v, files))
}

/// the value of the last `name` argument, if any
pub fn last<'a>(args: &'a [ArgValue], name: &str) -> Option<&'a str> {
    args.iter().rev().find(|x| x.name == name).map(|x| x.value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    const A: [ArgSpec; 3] = [
        ArgSpec { name: "shift", short: "s", value: "Number", help: "", values: &[], positional: false },
        ArgSpec { name: "chart", short: "c", value: "", help: "", values: &[], positional: false },
        ArgSpec { name: "kind", short: "", value: "Kind", help: "", values: &["a", "b"], positional: false },
    ];

    #[test]
    fn values_in_order() -> Result<()> {
        let prog = ProgSpec::new("test", FileCount::Many);
        let mut g = globals::Settings::new();
        let (v, files) =
            parse(&prog, &A, &argv(&["x", "-c", "--shift", "-3", "--kind", "b", "f1", "f2"]), &mut g)?;
        let got: Vec<(&str, &str)> = v.iter().map(|x| (x.name.as_str(), x.value.as_str())).collect();
        assert_eq!(got, vec![("chart", ""), ("shift", "-3"), ("kind", "b")]);
        assert_eq!(files, vec!["f1", "f2"]);
        assert_eq!(last(&v, "shift"), Some("-3"));
        assert_eq!(last(&v, "nope"), None);
        Ok(())
    }

    #[test]
    fn default_file_is_stdin() -> Result<()> {
        let prog = ProgSpec::new("test", FileCount::One);
        let mut g = globals::Settings::new();
        let (v, files) = parse(&prog, &A, &argv(&["x", "--min-matches", "5"]), &mut g)?;
        assert!(v.is_empty());
        assert_eq!(files, vec!["-"]);
        assert_eq!(g.min_matches, 5);
        Ok(())
    }
}
