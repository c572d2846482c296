use crate::config::Config;
use crate::core::advisor::{self, Advice, AdviceInput};
use crate::core::calculator;
use crate::core::report;
use crate::db::initialize::init_db;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::records::{NewRecord, insert_record};
use crate::errors::AppResult;
use crate::models::breakdown::EmissionBreakdown;
use crate::models::submission::Submission;
use crate::ui::messages::{caption, header, info, success, warning};

/// Result of one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcOutcome {
    pub record_id: i64,
    pub breakdown: EmissionBreakdown,
    pub advice: Advice,
}

pub struct CalcLogic;

impl CalcLogic {
    /// Compute, advise and store, without printing anything.
    pub fn evaluate(
        pool: &mut DbPool,
        cfg: &Config,
        submission: &Submission,
    ) -> AppResult<CalcOutcome> {
        let breakdown = calculator::compute(submission, &cfg.factors);

        let advice = advisor::advise(
            &breakdown,
            AdviceInput {
                transport: submission.transport,
                ai_hours: submission.ai_hours_or_zero(),
            },
            &cfg.benchmarks,
            &cfg.thresholds,
        );

        init_db(&pool.conn)?;
        let record_id = insert_record(
            &pool.conn,
            &NewRecord::from_submission(submission, breakdown),
        )?;

        ttlog_or_warn(
            &pool.conn,
            "calc",
            &format!("#{record_id}"),
            &format!(
                "{} ({}): total {:.2} kg CO₂",
                submission.name,
                submission.city,
                breakdown.total
            ),
        );

        Ok(CalcOutcome {
            record_id,
            breakdown,
            advice,
        })
    }

    /// Full `calc` flow: evaluate, store and print the report.
    pub fn submit(
        pool: &mut DbPool,
        cfg: &Config,
        submission: &Submission,
    ) -> AppResult<CalcOutcome> {
        let outcome = Self::evaluate(pool, cfg, submission)?;

        if submission.name.trim().is_empty() {
            header("Results");
        } else {
            header(format!("Results for {}", submission.name));
        }
        print!("{}", report::render_inputs(submission));
        println!();
        print!(
            "{}",
            report::render_breakdown(&outcome.breakdown, cfg.benchmarks.recommended)
        );
        println!();

        info("Sustainability benchmarks");
        print!("{}", report::render_benchmarks(&cfg.benchmarks));
        println!();

        let advice_text = report::render_advice(&outcome.advice);
        let (headline, bullets) = advice_text
            .split_once('\n')
            .unwrap_or((advice_text.as_str(), ""));
        match &outcome.advice {
            Advice::WithinLimits => success(headline),
            Advice::AboveLimits(_) => warning(headline),
        }
        print!("{}", bullets);
        println!();

        success(format!(
            "Record #{} stored in {}",
            outcome.record_id,
            cfg.database_path().display()
        ));
        caption(report::disclaimer());

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::advisor::Suggestion;
    use crate::db::stats::counts;
    use crate::models::food::FoodItem;
    use crate::models::meal::{MealSelection, MealSlot};
    use crate::models::submission::fixtures;
    use crate::models::transport::TransportMode;

    #[test]
    fn stores_one_row_per_evaluation() {
        let mut pool = DbPool::in_memory().unwrap();
        let cfg = Config::default();
        let s = fixtures::empty();

        let a = CalcLogic::evaluate(&mut pool, &cfg, &s).unwrap();
        let b = CalcLogic::evaluate(&mut pool, &cfg, &s).unwrap();

        assert!(b.record_id > a.record_id);
        assert_eq!(counts(&pool).unwrap().records, 2);
        assert_eq!(counts(&pool).unwrap().log, 2);
    }

    #[test]
    fn heavy_private_day_gets_advice() {
        let mut pool = DbPool::in_memory().unwrap();
        let cfg = Config::default();
        let mut s = fixtures::empty();
        s.transport = TransportMode::Private;
        s.distance_km = 20;
        s.meals.push(MealSelection::new(
            MealSlot::Dinner,
            vec![FoodItem::RedMeat],
            false,
        ));

        let outcome = CalcLogic::evaluate(&mut pool, &cfg, &s).unwrap();

        assert_eq!(
            outcome.advice.suggestions(),
            &[
                Suggestion::PreferPublicTransport,
                Suggestion::ReduceAnimalAndProcessedFood,
                Suggestion::IncreasePlantProtein,
            ]
        );

        let stored: f64 = pool
            .conn
            .query_row(
                "SELECT total FROM records WHERE id = ?1",
                [outcome.record_id],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(stored, outcome.breakdown.total);
    }
}
