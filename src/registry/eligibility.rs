use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::Voter;

/// Minimum voting age in whole years.
pub const VOTING_AGE: u32 = 18;

/// Verdict of an eligibility check. A voter that cannot be found never
/// produces one of these; the lookup surfaces a not-found error instead of
/// overloading `age` with a sentinel value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub eligible: bool,
    pub age: u32,
    pub message: String,
}

/// Evaluate a voter's eligibility as of `today`.
pub fn evaluate(voter: &Voter, today: NaiveDate) -> EligibilityResult {
    let age = age_on(voter.dob, today);
    let eligible = age >= VOTING_AGE;
    let message = if eligible {
        format!("{} is eligible to vote (age {age})", voter.name)
    } else {
        format!(
            "{} is not eligible to vote (age {age}, minimum age {VOTING_AGE})",
            voter.name
        )
    };
    EligibilityResult {
        eligible,
        age,
        message,
    }
}

/// Whole years elapsed since `dob`: the year difference, minus one if the
/// birthday has not yet been reached this year.
fn age_on(dob: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VoterSpec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn voter_born(dob: NaiveDate) -> Voter {
        let mut spec = VoterSpec::example1();
        spec.dob = dob;
        Voter::new(spec)
    }

    #[test]
    fn day_before_eighteenth_birthday_is_not_eligible() {
        let voter = voter_born(date(2006, 3, 3));
        let result = evaluate(&voter, date(2024, 3, 2));
        assert_eq!(result.age, 17);
        assert!(!result.eligible);
    }

    #[test]
    fn eighteenth_birthday_is_eligible() {
        let voter = voter_born(date(2006, 3, 3));
        let result = evaluate(&voter, date(2024, 3, 3));
        assert_eq!(result.age, 18);
        assert!(result.eligible);
    }

    #[test]
    fn eligibility_matches_age_threshold() {
        let today = date(2024, 7, 1);
        for dob in [
            date(1950, 1, 1),
            date(2006, 6, 30),
            date(2006, 7, 1),
            date(2006, 7, 2),
            date(2023, 12, 31),
        ] {
            let result = evaluate(&voter_born(dob), today);
            assert_eq!(result.eligible, result.age >= VOTING_AGE);
        }
    }

    #[test]
    fn leap_day_birthday_counts_from_march_first() {
        let voter = voter_born(date(2008, 2, 29));
        assert_eq!(evaluate(&voter, date(2026, 2, 28)).age, 17);
        assert_eq!(evaluate(&voter, date(2026, 3, 1)).age, 18);
    }

    #[test]
    fn age_never_goes_negative() {
        let voter = voter_born(date(2030, 1, 1));
        let result = evaluate(&voter, date(2024, 1, 1));
        assert_eq!(result.age, 0);
        assert!(!result.eligible);
    }

    #[test]
    fn message_names_the_voter() {
        let voter = voter_born(date(1990, 1, 1));
        let result = evaluate(&voter, date(2024, 7, 1));
        assert!(result.message.contains(&voter.name));
    }
}
