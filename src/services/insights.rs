//! Heuristic trend insights over a user's recent wellness logs.
//!
//! `generate_insights` is a pure function: it takes whatever logs the caller
//! fetched (any order, any count, one user) and produces a fresh set of
//! insight records on every call. It never fails; malformed metric values
//! flow through the arithmetic unchanged.

use serde::Serialize;

use crate::models::wellness_log::WellnessLog;

/// How many of the most recent entries feed the trend heuristic.
const ANALYSIS_WINDOW: usize = 5;

/// Minimum number of logs before per-metric insights are produced.
const MIN_LOGS_FOR_INSIGHTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Metric {
    General,
    #[serde(rename = "Sleep Quality")]
    SleepQuality,
    Fatigue,
    #[serde(rename = "Physical Discomfort")]
    PhysicalDiscomfort,
    #[serde(rename = "Overall Wellness")]
    OverallWellness,
}

/// One rendered insight. Ephemeral: recomputed per request, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    pub metric: Metric,
    pub trend: Trend,
    pub message: &'static str,
}

/// Produce the fixed set of insight records for one user's logs.
///
/// Fewer than three logs yields the single cold-start record. Otherwise the
/// analysis window is the up-to-five most recent entries (stable sort, so
/// duplicate dates keep their input order) and the result is always four
/// records: Sleep Quality, Fatigue, Physical Discomfort, Overall Wellness.
pub fn generate_insights(logs: &[WellnessLog]) -> Vec<Insight> {
    if logs.len() < MIN_LOGS_FOR_INSIGHTS {
        return vec![Insight {
            metric: Metric::General,
            trend: Trend::Stable,
            message: "Log more entries to see personalized insights.",
        }];
    }

    let mut recent: Vec<&WellnessLog> = logs.iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(ANALYSIS_WINDOW);

    let sleep_scores: Vec<f64> = recent.iter().map(|l| f64::from(l.sleep_quality)).collect();
    let sleep_trend = classify_trend(&sleep_scores);

    // Lower fatigue is better, so the sequence is reversed (on a copy) before
    // classification to invert the comparison direction.
    let mut fatigue_scores: Vec<f64> = recent.iter().map(|l| f64::from(l.fatigue)).collect();
    fatigue_scores.reverse();
    let fatigue_trend = classify_trend(&fatigue_scores);

    // Soreness and stiffness are folded into one discomfort score per entry,
    // reversed for the same reason as fatigue.
    let mut discomfort_scores: Vec<f64> = recent
        .iter()
        .map(|l| f64::from(l.soreness + l.stiffness) / 2.0)
        .collect();
    discomfort_scores.reverse();
    let discomfort_trend = classify_trend(&discomfort_scores);

    // The composite flips the three lower-is-better metrics, so every term
    // rises when wellness improves and no reversal is needed.
    let overall_scores: Vec<f64> = recent
        .iter()
        .map(|l| {
            f64::from(l.sleep_quality + (11 - l.fatigue) + (11 - l.soreness) + (11 - l.stiffness))
                / 4.0
        })
        .collect();
    let overall_trend = classify_trend(&overall_scores);

    vec![
        Insight {
            metric: Metric::SleepQuality,
            trend: sleep_trend,
            message: match sleep_trend {
                Trend::Improving => "Your sleep quality has been improving recently.",
                Trend::Declining => {
                    "Your sleep quality has been declining. Consider adjusting your sleep routine."
                }
                Trend::Stable => "Your sleep quality has been consistent.",
            },
        },
        Insight {
            metric: Metric::Fatigue,
            trend: fatigue_trend,
            message: match fatigue_trend {
                Trend::Improving => "Your fatigue levels have been decreasing. Great job!",
                Trend::Declining => "Your fatigue levels have been increasing. Consider more rest.",
                Trend::Stable => "Your fatigue levels have been stable.",
            },
        },
        Insight {
            metric: Metric::PhysicalDiscomfort,
            trend: discomfort_trend,
            message: match discomfort_trend {
                Trend::Improving => "Your soreness and stiffness have been improving.",
                Trend::Declining => {
                    "Your soreness and stiffness have been increasing. Consider gentle stretching."
                }
                Trend::Stable => "Your physical discomfort levels have been consistent.",
            },
        },
        Insight {
            metric: Metric::OverallWellness,
            trend: overall_trend,
            message: match overall_trend {
                Trend::Improving => {
                    "Your overall wellness has been trending positively. Keep it up!"
                }
                Trend::Declining => {
                    "Your overall wellness has been declining slightly. Consider reviewing your habits."
                }
                Trend::Stable => "Your overall wellness has been stable.",
            },
        },
    ]
}

/// Majority-direction vote over consecutive pairs of a score sequence.
///
/// A direction wins only if it has a strict majority of the directed pairs
/// AND accounts for at least half of all pairs (equal neighbors vote for
/// neither side); anything less reads as stable. Deliberately cheap and
/// explainable, not a regression.
pub fn classify_trend(scores: &[f64]) -> Trend {
    if scores.len() < MIN_LOGS_FOR_INSIGHTS {
        return Trend::Stable;
    }

    let mut rising = 0usize;
    let mut falling = 0usize;
    for pair in scores.windows(2) {
        if pair[1] > pair[0] {
            rising += 1;
        } else if pair[1] < pair[0] {
            falling += 1;
        }
    }

    let pairs = scores.len() - 1;
    // count * 2 >= pairs is count >= pairs/2 without integer truncation.
    if rising > falling && rising * 2 >= pairs {
        Trend::Improving
    } else if falling > rising && falling * 2 >= pairs {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 9, d).unwrap()
    }

    /// Builds one log per element of `sleep`, one day apart, oldest first.
    /// Metrics not under test are held flat at 5.
    fn logs_with_sleep(sleep: &[i32]) -> Vec<WellnessLog> {
        let user_id = Uuid::new_v4();
        sleep
            .iter()
            .enumerate()
            .map(|(i, &sq)| WellnessLog {
                id: Uuid::new_v4(),
                user_id,
                date: day(1 + i as u32),
                sleep_quality: sq,
                soreness: 5,
                stiffness: 5,
                fatigue: 5,
                notes: None,
            })
            .collect()
    }

    fn logs_with_fatigue(fatigue: &[i32]) -> Vec<WellnessLog> {
        let user_id = Uuid::new_v4();
        fatigue
            .iter()
            .enumerate()
            .map(|(i, &f)| WellnessLog {
                id: Uuid::new_v4(),
                user_id,
                date: day(1 + i as u32),
                sleep_quality: 5,
                soreness: 5,
                stiffness: 5,
                fatigue: f,
                notes: None,
            })
            .collect()
    }

    fn trend_for(insights: &[Insight], metric: Metric) -> Trend {
        insights
            .iter()
            .find(|i| i.metric == metric)
            .expect("metric missing from insights")
            .trend
    }

    #[test]
    fn fewer_than_three_logs_yields_cold_start_record() {
        for n in 0..3 {
            let logs = logs_with_sleep(&vec![9; n]);
            let insights = generate_insights(&logs);
            assert_eq!(insights.len(), 1, "n={n}");
            assert_eq!(insights[0].metric, Metric::General);
            assert_eq!(insights[0].trend, Trend::Stable);
            assert_eq!(
                insights[0].message,
                "Log more entries to see personalized insights."
            );
        }
    }

    #[test]
    fn three_or_more_logs_yield_four_records_in_fixed_order() {
        let insights = generate_insights(&logs_with_sleep(&[5, 5, 5]));
        let metrics: Vec<Metric> = insights.iter().map(|i| i.metric).collect();
        assert_eq!(
            metrics,
            vec![
                Metric::SleepQuality,
                Metric::Fatigue,
                Metric::PhysicalDiscomfort,
                Metric::OverallWellness,
            ]
        );
    }

    #[test]
    fn unsorted_input_is_windowed_by_date() {
        // Same data shuffled must produce the same result as sorted input.
        let sorted = logs_with_sleep(&[3, 9, 2, 8, 4]);
        let mut shuffled = sorted.clone();
        shuffled.swap(0, 4);
        shuffled.swap(1, 3);
        let a: Vec<Trend> = generate_insights(&sorted).iter().map(|i| i.trend).collect();
        let b: Vec<Trend> = generate_insights(&shuffled)
            .iter()
            .map(|i| i.trend)
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn window_ignores_entries_older_than_the_most_recent_five() {
        // Seven logs and their last-five suffix must classify identically;
        // the two oldest entries never reach the window.
        let base = logs_with_sleep(&[5, 5, 6, 7, 8, 9, 10]);
        let recent_only = logs_with_sleep(&[6, 7, 8, 9, 10]);
        let a = trend_for(&generate_insights(&base), Metric::SleepQuality);
        let b = trend_for(&generate_insights(&recent_only), Metric::SleepQuality);
        assert_eq!(a, b);
    }

    #[test]
    fn sleep_scores_rising_in_window_order_read_improving() {
        // Window order is most-recent-first: chronological [9,8,7,6,6]
        // becomes [6,6,7,8,9] for the classifier. Three rising pairs out of
        // four carries the vote.
        let logs = logs_with_sleep(&[9, 8, 7, 6, 6]);
        assert_eq!(
            trend_for(&generate_insights(&logs), Metric::SleepQuality),
            Trend::Improving
        );
    }

    #[test]
    fn fatigue_reversal_inverts_the_comparison_direction() {
        // Chronological fatigue [8,7,6,5,4]: window order [4,5,6,7,8],
        // reversed back to [8,7,6,5,4], all pairs falling.
        let logs = logs_with_fatigue(&[8, 7, 6, 5, 4]);
        assert_eq!(
            trend_for(&generate_insights(&logs), Metric::Fatigue),
            Trend::Declining
        );

        // And the mirror image reads improving.
        let logs = logs_with_fatigue(&[4, 5, 6, 7, 8]);
        assert_eq!(
            trend_for(&generate_insights(&logs), Metric::Fatigue),
            Trend::Improving
        );
    }

    #[test]
    fn discomfort_averages_soreness_and_stiffness() {
        let user_id = Uuid::new_v4();
        // Soreness flat, stiffness moving: the average still moves.
        let logs: Vec<WellnessLog> = [2, 4, 6, 8, 10]
            .iter()
            .enumerate()
            .map(|(i, &stiffness)| WellnessLog {
                id: Uuid::new_v4(),
                user_id,
                date: day(1 + i as u32),
                sleep_quality: 5,
                soreness: 4,
                stiffness,
                fatigue: 5,
                notes: None,
            })
            .collect();
        // Chronological discomfort averages: 3,4,5,6,7. Window order
        // [7,6,5,4,3], reversed [3,4,5,6,7], all rising.
        assert_eq!(
            trend_for(&generate_insights(&logs), Metric::PhysicalDiscomfort),
            Trend::Improving
        );
    }

    #[test]
    fn overall_composite_needs_no_reversal() {
        // Every sub-term of the composite moves in the better direction as
        // time advances, so the chronological composite rises by 1 per day.
        let user_id = Uuid::new_v4();
        let logs: Vec<WellnessLog> = (0..5)
            .map(|i| WellnessLog {
                id: Uuid::new_v4(),
                user_id,
                date: day(1 + i),
                sleep_quality: 4 + i as i32,
                soreness: 8 - i as i32,
                stiffness: 8 - i as i32,
                fatigue: 8 - i as i32,
                notes: None,
            })
            .collect();
        // Window order puts the composites most-recent-first, all pairs
        // falling, so the unreversed classifier reads declining.
        assert_eq!(
            trend_for(&generate_insights(&logs), Metric::OverallWellness),
            Trend::Declining
        );
    }

    #[test]
    fn flat_sequences_are_stable_for_every_metric() {
        let insights = generate_insights(&logs_with_sleep(&[5, 5, 5, 5, 5]));
        for insight in &insights {
            assert_eq!(insight.trend, Trend::Stable, "{:?}", insight.metric);
        }
    }

    #[test]
    fn messages_come_from_the_fixed_table() {
        let insights = generate_insights(&logs_with_sleep(&[5, 5, 5, 5, 5]));
        assert_eq!(insights[0].message, "Your sleep quality has been consistent.");
        assert_eq!(insights[1].message, "Your fatigue levels have been stable.");
        assert_eq!(
            insights[2].message,
            "Your physical discomfort levels have been consistent."
        );
        assert_eq!(insights[3].message, "Your overall wellness has been stable.");
    }

    #[test]
    fn duplicate_dates_are_treated_as_ordered_data_points() {
        let mut logs = logs_with_sleep(&[4, 5, 6, 7]);
        logs[3].date = logs[2].date;
        // No dedup, no panic; still four records.
        assert_eq!(generate_insights(&logs).len(), 4);
    }

    #[test]
    fn out_of_range_values_flow_through_without_panicking() {
        let mut logs = logs_with_sleep(&[5, 5, 5, 5, 5]);
        logs[0].sleep_quality = -3;
        logs[4].fatigue = 42;
        logs[2].soreness = 0;
        assert_eq!(generate_insights(&logs).len(), 4);
    }

    #[test]
    fn classify_trend_needs_three_scores() {
        assert_eq!(classify_trend(&[]), Trend::Stable);
        assert_eq!(classify_trend(&[1.0]), Trend::Stable);
        assert_eq!(classify_trend(&[1.0, 9.0]), Trend::Stable);
    }

    #[test]
    fn classify_trend_majority_vote() {
        assert_eq!(classify_trend(&[1.0, 2.0, 3.0]), Trend::Improving);
        assert_eq!(classify_trend(&[3.0, 2.0, 1.0]), Trend::Declining);
        // Rising majority with one dip: 3 rising, 1 falling out of 4 pairs.
        assert_eq!(classify_trend(&[2.0, 4.0, 3.0, 5.0, 6.0]), Trend::Improving);
    }

    #[test]
    fn classify_trend_alternating_sequence_is_stable() {
        assert_eq!(classify_trend(&[5.0, 6.0, 5.0, 6.0, 5.0]), Trend::Stable);
    }

    #[test]
    fn classify_trend_equal_neighbors_vote_for_neither_side() {
        // 2 rising, 0 falling, 2 equal out of 4 pairs: rising still reaches
        // half of all pairs, so the trend is improving.
        assert_eq!(classify_trend(&[5.0, 5.0, 6.0, 6.0, 7.0]), Trend::Improving);
        // 1 rising, 0 falling, 3 equal: strict majority but below half.
        assert_eq!(classify_trend(&[5.0, 5.0, 5.0, 5.0, 6.0]), Trend::Stable);
    }

    #[test]
    fn classify_trend_depends_only_on_the_sequence() {
        // Affine-shifted copies of the same shape classify identically.
        let base = [2.0, 4.0, 3.0, 5.0, 6.0];
        let shifted: Vec<f64> = base.iter().map(|v| v + 100.0).collect();
        assert_eq!(classify_trend(&base), classify_trend(&shifted));
    }
}
