use crate::error::Error;

/// A single command line token together with its 1-based position among the raw arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
    pub position: usize,
    pub value: String,
}

/// Returns true if `token` is classified as a flag.
///
/// Anything longer than one character that starts with `-` is a flag, so a lone `-` stays
/// positional.
pub fn is_flag(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}

/// A classified view of command line arguments
#[derive(Debug, Clone, Default)]
pub struct Args {
    program: String,
    original: Vec<String>,
    positionals: Vec<Arg>,
    flags: Vec<Arg>,
}

impl Args {
    /// Classifies `args` into positionals and flags. The input is expected to be in the same
    /// format that [args()](std::env::args) returns (i.e. the name of the executable is first)
    pub fn parse_from<I, T>(args: I) -> Args
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut iter = args.into_iter().map(|s| s.into());

        let mut result = Args {
            program: iter.next().unwrap_or_default(),
            ..Args::default()
        };

        for (idx, value) in iter.enumerate() {
            result.original.push(value.clone());
            let arg = Arg {
                position: idx + 1,
                value,
            };

            if is_flag(&arg.value) {
                result.flags.push(arg);
            } else {
                result.positionals.push(arg);
            }
        }

        tracing::debug!(
            program = %result.program,
            positionals = result.positionals.len(),
            flags = result.flags.len(),
            "classified arguments"
        );

        result
    }

    /// The name the program was invoked with
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Every argument after the program name, in the order given
    pub fn original_args(&self) -> &[String] {
        &self.original
    }

    pub fn positionals(&self) -> &[Arg] {
        &self.positionals
    }

    pub fn flags(&self) -> &[Arg] {
        &self.flags
    }

    /// Returns true if `flag` (including its dashes) was passed
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f.value == flag)
    }

    /// Returns true if `arg` was passed as a positional argument
    pub fn has_arg(&self, arg: &str) -> bool {
        self.positionals.iter().any(|a| a.value == arg)
    }

    /// Returns the positional argument at `position`, counting from 1
    pub fn arg_at(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|idx| self.positionals.get(idx))
            .map(|a| a.value.as_str())
    }

    /// Like [`arg_at`](Self::arg_at), falling back to `fallback` when `position` is out of range
    pub fn arg_at_or<'a>(&'a self, position: usize, fallback: &'a str) -> &'a str {
        self.arg_at(position).unwrap_or(fallback)
    }

    /// Like [`arg_at`](Self::arg_at), failing with [`Error::ArgumentOutOfRange`]
    pub fn require_arg(&self, position: usize) -> Result<&str, Error> {
        self.arg_at(position).ok_or(Error::ArgumentOutOfRange {
            position,
            available: self.positionals.len(),
        })
    }

    /// Succeeds only if the positional argument at `position` is one of `allowed`
    pub fn enforce_arg(&self, position: usize, allowed: &[&str]) -> Result<&str, Error> {
        let actual = self.require_arg(position)?;

        if allowed.contains(&actual) {
            return Ok(actual);
        }

        Err(Error::ArgumentMismatch {
            position,
            expected: allowed.iter().map(|s| s.to_string()).collect(),
            actual: actual.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args() {
        let cmdline: [&str; 0] = [];
        let args = Args::parse_from(cmdline);
        assert_eq!(args.program(), "");
        assert!(args.positionals().is_empty());
        assert!(args.flags().is_empty());
        assert!(args.original_args().is_empty());
    }

    #[test]
    fn program_name_is_not_an_argument() {
        let args = Args::parse_from(["exe"]);
        assert_eq!(args.program(), "exe");
        assert!(args.positionals().is_empty());
        assert!(!args.has_arg("exe"));
    }

    #[test]
    fn flags_and_positionals_keep_positions() {
        let cmdline = ["exe", "build", "-v", "src", "--release"];
        let args = Args::parse_from(cmdline);

        assert_eq!(
            args.positionals(),
            [
                Arg {
                    position: 1,
                    value: "build".into()
                },
                Arg {
                    position: 3,
                    value: "src".into()
                },
            ]
        );
        assert_eq!(
            args.flags(),
            [
                Arg {
                    position: 2,
                    value: "-v".into()
                },
                Arg {
                    position: 4,
                    value: "--release".into()
                },
            ]
        );
        assert_eq!(args.original_args(), ["build", "-v", "src", "--release"]);
    }

    #[test]
    fn partition_is_total() {
        let cmdline = ["exe", "-", "", "--", "-x", "a-b", " -y", "x", "--key=value"];
        let args = Args::parse_from(cmdline);

        assert_eq!(args.positionals().len() + args.flags().len(), cmdline.len() - 1);
        for arg in args.flags() {
            assert!(arg.value.len() > 1 && arg.value.starts_with('-'));
        }
        for arg in args.positionals() {
            assert!(!is_flag(&arg.value));
        }
        assert!(args.has_arg("-"));
        assert!(args.has_arg(""));
        assert!(args.has_arg(" -y"));
        assert!(args.has_flag("--"));
        // no value splitting
        assert!(args.has_flag("--key=value"));
        assert!(!args.has_flag("--key"));
    }

    #[test]
    fn positional_lookup_is_one_based() {
        let args = Args::parse_from(["exe", "build", "-v", "web"]);
        assert_eq!(args.arg_at(0), None);
        assert_eq!(args.arg_at(1), Some("build"));
        assert_eq!(args.arg_at(2), Some("web"));
        assert_eq!(args.arg_at(3), None);
        assert_eq!(args.arg_at_or(3, "all"), "all");
        assert_eq!(args.arg_at_or(2, "all"), "web");
    }

    #[test]
    fn require_arg_reports_range() {
        let args = Args::parse_from(["exe", "build"]);
        assert_eq!(args.require_arg(1).unwrap(), "build");
        assert!(matches!(
            args.require_arg(2),
            Err(Error::ArgumentOutOfRange {
                position: 2,
                available: 1
            })
        ));
    }

    #[test]
    fn enforce_arg() {
        let allowed = ["build", "bundle"];

        let args = Args::parse_from(["exe", "build"]);
        assert_eq!(args.enforce_arg(1, &allowed).unwrap(), "build");

        let args = Args::parse_from(["exe", "bundle"]);
        assert_eq!(args.enforce_arg(1, &allowed).unwrap(), "bundle");

        let args = Args::parse_from(["exe", "deploy"]);
        let err = args.enforce_arg(1, &allowed).unwrap_err();
        match err {
            Error::ArgumentMismatch {
                position,
                expected,
                actual,
            } => {
                assert_eq!(position, 1);
                assert_eq!(expected, ["build", "bundle"]);
                assert_eq!(actual, "deploy");
            }
            other => panic!("unexpected error: {other}"),
        }

        let args = Args::parse_from(["exe", "-v"]);
        assert!(matches!(
            args.enforce_arg(1, &allowed),
            Err(Error::ArgumentOutOfRange { position: 1, .. })
        ));
    }
}
