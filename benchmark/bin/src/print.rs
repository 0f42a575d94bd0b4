#![expect(dead_code, reason = "code hidden behind feature flags")]

use cfg_if::cfg_if;

use crate::timings::Timings;

/// Print the final report of per-trial timings.
pub(crate) fn print_timings(timings: &Timings) {
    println!("\nFinished all trials, printing results:");

    cfg_if! {
        if #[cfg(feature = "json")] {
            print_timings_json(timings);
        } else {
            print_timings_plain(timings);
        }
    }
}

/// Default timing formatting, one `<count> :  <seconds>` line per
/// trial, ascending by count.
pub(crate) fn print_timings_plain(timings: &Timings) {
    print!("\n{}", render_timings(timings));
}

/// The plain report as a string, ascending by iteration count.
pub(crate) fn render_timings(timings: &Timings) -> String {
    let mut s = String::new();

    for (num_iterations, time) in timings {
        s += &format!("{num_iterations} :  {time}\n");
    }

    s
}

/// Enabled via `json` feature.
pub(crate) fn print_timings_json(timings: &Timings) {
    let json = serde_json::to_string_pretty(timings).unwrap();
    println!("\n{json}");
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Insertion order is irrelevant, the report is always ascending.
    #[test]
    fn report_is_sorted_ascending() {
        let mut timings = Timings::new();
        timings.insert(128, 7.0);
        timings.insert(2, 0.25);
        timings.insert(16, 1.5);

        assert_eq!(render_timings(&timings), "2 :  0.25\n16 :  1.5\n128 :  7\n");
    }

    #[test]
    fn empty_report_renders_nothing() {
        assert_eq!(render_timings(&Timings::new()), "");
    }
}
