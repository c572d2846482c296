use crate::cli::parser::{CalcArgs, Commands};
use crate::config::Config;
use crate::core::calc::CalcLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::food::FoodItem;
use crate::models::meal::{MealSelection, MealSlot};
use crate::models::submission::Submission;

fn meal(slot: MealSlot, items: &Option<Vec<FoodItem>>, organic: bool) -> Option<MealSelection> {
    items
        .as_ref()
        .map(|items| MealSelection::new(slot, items.clone(), organic))
}

/// Turn the parsed form into a submission.
pub fn to_submission(args: &CalcArgs) -> Submission {
    let meals = [
        meal(MealSlot::Breakfast, &args.breakfast, args.breakfast_organic),
        meal(MealSlot::Lunch, &args.lunch, args.lunch_organic),
        meal(MealSlot::Dinner, &args.dinner, args.dinner_organic),
        meal(MealSlot::Snacks, &args.snacks, args.snacks_organic),
    ]
    .into_iter()
    .flatten()
    .collect();

    Submission {
        name: args.name.trim().to_string(),
        education: args.education,
        city: args.city.trim().to_string(),
        transport: args.transport,
        distance_km: args.distance,
        meals,
        laptop_hours: args.laptop,
        mobile_hours: args.mobile,
        ai_hours: args.ai_hours,
    }
}

/// Calculate, print and store one submission.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc(args) = cmd {
        let submission = to_submission(args);
        let mut pool = DbPool::new(cfg.database_path())?;
        CalcLogic::submit(&mut pool, cfg, &submission)?;
    }
    Ok(())
}
