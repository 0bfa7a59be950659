/*! Summary statistics for collapsing repeated measurements.

## Example

Suppose a probe was measured three times, and one of the readings was
missing.  Collect the readings we do have into a `Sample` and reduce it with
whichever `Summary` the user asked for.

```
# use collapse_stats::*;
let sample = vec![4.0_f64, 1.0, 2.5].into_iter().collect::<Sample>();

let summary: Summary = "median".parse().unwrap();
assert_eq!(summary.apply(&sample), Some(2.5));

let summary: Summary = "F".parse().unwrap(); // legacy spelling of "mean"
assert_eq!(format!("{:.3}", summary.apply(&sample).unwrap()), "2.500");

// Nothing to summarize
assert_eq!(summary.apply(&Sample::new()), None);
```

*/

mod stats;

pub use stats::*;
use std::fmt;
use std::str::FromStr;

/// The statistic used to reduce a column of values to a single number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Summary {
    Mean,
    Median,
}

impl Summary {
    /// Reduce `sample` to one number.  Returns `None` for an empty sample.
    pub fn apply(self, sample: &Sample) -> Option<f64> {
        match self {
            Summary::Mean => sample.mean(),
            Summary::Median => sample.median(),
        }
    }
}

impl FromStr for Summary {
    type Err = Error;
    fn from_str(x: &str) -> Result<Summary, Error> {
        // "F" and "T" are the spellings older scripts used
        match x {
            "mean" | "F" => Ok(Summary::Mean),
            "median" | "T" => Ok(Summary::Median),
            _ => Err(Error::UnknownSummary(x.to_string())),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Summary::Mean => f.write_str("mean"),
            Summary::Median => f.write_str("median"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    UnknownSummary(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnknownSummary(x) => write!(
                f,
                "unknown mode \"{}\": expected either 'mean' or 'median'",
                x
            ),
        }
    }
}
impl std::error::Error for Error {}
