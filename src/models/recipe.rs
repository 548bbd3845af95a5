use serde::{Deserialize, Serialize};

use super::{FieldType, OutputSchema};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub recipe_name: String,
    pub description: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl Recipe {
    pub fn schema() -> OutputSchema {
        OutputSchema::new()
            .required_field("recipeName", FieldType::String, "The name of the recipe.")
            .required_field(
                "description",
                FieldType::String,
                "A short, appetizing description of the dish.",
            )
            .required_field(
                "prepTime",
                FieldType::String,
                "Preparation time, e.g., '15 minutes'.",
            )
            .required_field("cookTime", FieldType::String, "Cooking time, e.g., '30 minutes'.")
            .required_field(
                "servings",
                FieldType::String,
                "Number of servings, e.g., '4 people'.",
            )
            .required_field(
                "ingredients",
                FieldType::StringArray,
                "A list of ingredients with measurements.",
            )
            .required_field(
                "instructions",
                FieldType::StringArray,
                "A list of step-by-step cooking instructions.",
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_requires_every_field() {
        let schema = Recipe::schema();
        assert_eq!(schema.required.len(), 7);
        assert_eq!(schema.field_type("ingredients"), Some(FieldType::StringArray));
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let value = json!({
            "recipeName": "Ayam Penyet",
            "description": "Smashed fried chicken with sambal.",
            "prepTime": "20 minutes",
            "cookTime": "40 minutes",
            "servings": "4 people",
            "ingredients": ["1 whole chicken"],
            "instructions": ["Fry the chicken."]
        });
        assert!(Recipe::schema().validate(&value).is_ok());
        let recipe: Recipe = serde_json::from_value(value).unwrap();
        assert_eq!(recipe.recipe_name, "Ayam Penyet");
        assert_eq!(recipe.prep_time, "20 minutes");
    }
}
