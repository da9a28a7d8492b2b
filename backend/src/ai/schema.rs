//! Response schemas sent with structured generation requests

use serde_json::{json, Value};

/// Schema for a (partial or full) weekly plan
pub fn plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "workoutPlan": {
                "type": "ARRAY",
                "description": "Workout plan, one entry per day.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "day": { "type": "STRING", "description": "Day of the week (e.g., Monday)." },
                        "focus": {
                            "type": "STRING",
                            "description": "Main muscle group or activity for the day (e.g., Upper Body Strength, Cardio)."
                        },
                        "exercises": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "name": { "type": "STRING" },
                                    "sets": { "type": "STRING", "description": "e.g., 3-4" },
                                    "reps": { "type": "STRING", "description": "e.g., 8-12" },
                                    "rest": { "type": "STRING", "description": "e.g., 60s" },
                                    "tips": { "type": "STRING", "description": "A brief tip for performing the exercise." }
                                },
                                "required": ["name", "sets", "reps", "rest", "tips"]
                            }
                        }
                    },
                    "required": ["day", "focus", "exercises"]
                }
            },
            "mealPlan": {
                "type": "ARRAY",
                "description": "Meal plan, one entry per day.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "day": { "type": "STRING", "description": "Day of the week (e.g., Monday)." },
                        "meals": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "name": { "type": "STRING", "description": "e.g., Breakfast, Lunch, Dinner, Snack" },
                                    "description": { "type": "STRING", "description": "Example food items for the meal." },
                                    "calories": { "type": "STRING" },
                                    "macros": macros_schema(&["protein", "carbs", "fat"])
                                },
                                "required": ["name", "description", "calories", "macros"]
                            }
                        },
                        "dailyTotals": macros_schema(&["calories", "protein", "carbs", "fat"])
                    },
                    "required": ["day", "meals", "dailyTotals"]
                }
            }
        },
        "required": ["workoutPlan", "mealPlan"]
    })
}

/// Schema for a nutrition lookup
pub fn nutrition_schema() -> Value {
    let number = json!({ "type": "NUMBER" });
    json!({
        "type": "OBJECT",
        "properties": {
            "calories": number,
            "protein": number,
            "carbs": number,
            "fat": number
        },
        "required": ["calories", "protein", "carbs", "fat"]
    })
}

fn macros_schema(fields: &[&str]) -> Value {
    let properties: serde_json::Map<String, Value> = fields
        .iter()
        .map(|f| (f.to_string(), json!({ "type": "STRING" })))
        .collect();
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": fields
    })
}
