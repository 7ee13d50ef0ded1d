use badge::api::ProjectId;
use badge::document::{DEFAULT_COLOR, DEFAULT_LABEL, DEFAULT_NAMED_LOGO};
use cfwidget_client::{DEFAULT_API_URL, DEFAULT_USER_AGENT};
use clap::Parser;
use std::{
    fmt::{Debug, Display},
    path::PathBuf,
    str::FromStr,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Comma separated project ids
    #[clap(short, long, env, required = true, use_value_delimiter = true)]
    pub projects: Vec<ProjectId>,

    /// Badge file path
    #[clap(short, long, env, default_value = "badges/downloads.json", parse(from_os_str))]
    pub output: PathBuf,

    /// Download count API URL
    #[clap(long, env, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Badge label
    #[clap(long, env, default_value = DEFAULT_LABEL)]
    pub label: String,

    /// Badge color
    #[clap(long, env, default_value = DEFAULT_COLOR)]
    pub color: String,

    /// Badge logo name
    #[clap(long, env, default_value = DEFAULT_NAMED_LOGO)]
    pub named_logo: String,

    /// User-Agent header sent to the API
    #[clap(long, env, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Request timeout in seconds
    #[clap(long, env, default_value_t = 30, parse(try_from_str=timeout_in_range))]
    pub timeout: u64,
}

fn timeout_in_range(value: &str) -> clap::Result<u64, String> {
    number_in_range(value, 1, 600, "timeout".to_string())
}

fn number_in_range<T>(value: &str, min: T, max: T, name: String) -> clap::Result<T, String>
where
    T: FromStr + PartialOrd + Display,
    <T as FromStr>::Err: Display,
{
    value.parse::<T>().map_err(|err| format!("{}", err)).and_then(|value| {
        if value < min || value > max {
            return Err(format!("{} is not in range {} .. {}.", name, min, max));
        }
        Ok(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_delimited_test() {
        let args = Args::try_parse_from(["downloads_badge", "--projects", "238222,223794, 306612"]).unwrap();
        let projects: Vec<&str> = args.projects.iter().map(ProjectId::as_str).collect();
        assert_eq!(projects, vec!["238222", "223794", "306612"]);
        assert_eq!(args.output, PathBuf::from("badges/downloads.json"));
        assert_eq!(args.api_url, DEFAULT_API_URL);
        assert_eq!(args.label, DEFAULT_LABEL);
        assert_eq!(args.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(args.timeout, 30);
    }

    #[test]
    fn projects_required_test() {
        assert!(Args::try_parse_from(["downloads_badge"]).is_err());
    }

    #[test]
    fn empty_project_rejected_test() {
        assert!(Args::try_parse_from(["downloads_badge", "-p", "1,,2"]).is_err());
    }

    #[test]
    fn timeout_range_test() {
        assert!(Args::try_parse_from(["downloads_badge", "-p", "1", "--timeout", "0"]).is_err());
        assert!(Args::try_parse_from(["downloads_badge", "-p", "1", "--timeout", "601"]).is_err());
        let args = Args::try_parse_from(["downloads_badge", "-p", "1", "--timeout", "600"]).unwrap();
        assert_eq!(args.timeout, 600);
    }

    #[test]
    fn number_in_range_test() {
        assert_eq!(number_in_range("5", 1, 10, "n".to_string()), Ok(5));
        assert_eq!(
            number_in_range("11", 1, 10, "n".to_string()),
            Err("n is not in range 1 .. 10.".to_string())
        );
        assert!(number_in_range::<u32>("x", 1, 10, "n".to_string()).is_err());
    }
}
