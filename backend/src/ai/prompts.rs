//! Prompt templates

use fitplan_shared::log::DailyLog;
use fitplan_shared::plan::FitnessPlan;
use fitplan_shared::profile::UserProfile;

fn profile_block(profile: &UserProfile, maintenance_calories: i32) -> String {
    format!(
        "User Profile:\n\
         - Age: {}\n\
         - Weight: {} kg\n\
         - Height: {} cm\n\
         - Gender: {}\n\
         - Activity Level: {}\n\
         - Primary Goal: {}\n\
         - Dietary Preference: {}\n\
         - Estimated maintenance calories: {} kcal/day\n",
        profile.age,
        profile.weight,
        profile.height,
        profile.gender,
        profile.activity_level.description(),
        profile.goal,
        profile.dietary_preference,
        maintenance_calories,
    )
}

const INSTRUCTIONS: &str = "Instructions:\n\
1. Workout Plan: include a mix of strength training, cardio, and rest days. For each exercise, \
provide the name, number of sets, repetition range, rest time, and a brief, helpful tip.\n\
2. Meal Plan: 3 main meals and 1-2 snacks per day. For each meal, provide a description, \
approximate calories, and macronutrient breakdown (protein, carbs, fat). Also provide the total \
daily calories and macros for each day, set relative to the maintenance estimate and the goal.\n\
3. Tone: encouraging, motivational, and easy to understand.\n";

/// Prompt for day 1 only, so the user sees a plan quickly
pub fn initial_plan(profile: &UserProfile, maintenance_calories: i32) -> String {
    format!(
        "Create the FIRST DAY (Monday) of a personalized 7-day fitness and diet plan for the \
         following user. Return exactly one entry in workoutPlan and one entry in mealPlan.\n\n\
         {}\n{}",
        profile_block(profile, maintenance_calories),
        INSTRUCTIONS
    )
}

/// Prompt for days 2 to 7, given the already generated first day
pub fn remaining_plan(
    profile: &UserProfile,
    maintenance_calories: i32,
    initial_plan: &FitnessPlan,
) -> String {
    let day_one = serde_json::to_string(initial_plan).unwrap_or_default();
    format!(
        "Continue the personalized 7-day fitness and diet plan for the following user. Day 1 is \
         already planned:\n{}\n\n\
         Create the remaining six days (Tuesday through Sunday). Return exactly six entries in \
         workoutPlan and six entries in mealPlan, balanced against day 1.\n\n{}\n{}",
        day_one,
        profile_block(profile, maintenance_calories),
        INSTRUCTIONS
    )
}

pub fn nutrition(food: &str) -> String {
    format!(
        "Provide the approximate nutritional information for the following food: \"{}\". \
         Return calories (kcal) and protein, carbs and fat in grams for the stated quantity, \
         or a typical serving if no quantity is given.",
        food.trim()
    )
}

pub fn progress_forecast(log: &DailyLog) -> String {
    let goal = log
        .calories_goal
        .map(|g| format!("{} kcal", g))
        .unwrap_or_else(|| "not set".to_string());
    let completed: Vec<&str> = log.workouts_completed.iter().map(String::as_str).collect();
    format!(
        "You are an encouraging fitness coach. Based on today's activity, write a short forecast \
         (3-4 sentences) of the user's likely progress in weight, BMI and fitness over the next \
         month if they keep this up.\n\n\
         Today's log:\n\
         - Weight: {} kg\n\
         - Calories eaten: {:.0} kcal (goal: {})\n\
         - Calories burned: {} kcal\n\
         - Protein: {:.0} g\n\
         - Steps: {}\n\
         - Sleep: {}\n\
         - Workouts completed: {}\n",
        log.weight,
        log.calories,
        goal,
        log.calories_burned,
        log.protein,
        log.steps,
        log.sleep,
        if completed.is_empty() {
            "none".to_string()
        } else {
            completed.join(", ")
        },
    )
}
