use serde_json::json;

/// Returns the JSON schema for receipt analysis LLM responses
pub fn receipt_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "score": { "type": "number" },
            "dominant_category": { "type": "string" },
            "item_detail": { "type": "string" },
            "score_breakdown": {
                "type": "object",
                "properties": {
                    "red_meat": { "type": "number" },
                    "white_meat": { "type": "number" },
                    "dairy": { "type": "number" },
                    "processed_food": { "type": "number" },
                    "plastic_packaging": { "type": "number" },
                    "produce": { "type": "number" },
                    "organic": { "type": "number" }
                }
            },
            "insights": {
                "type": "array",
                "items": { "type": "string" }
            },
            "alternatives": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "item": { "type": "string" },
                        "replacement": { "type": "string" },
                        "reason": { "type": "string" }
                    },
                    "required": ["item", "replacement", "reason"]
                }
            },
            "environmental_fact": { "type": "string" },
            "estimated_emission_kg_co2": { "type": "number" },
            "comparison": { "type": "string" }
        },
        "required": ["score", "dominant_category"]
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::receipt_analysis::entities::REQUIRED_FIELDS;

    use super::*;

    #[test]
    fn schema_required_list_matches_the_validator() {
        let schema = receipt_analysis_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, REQUIRED_FIELDS);
    }
}
