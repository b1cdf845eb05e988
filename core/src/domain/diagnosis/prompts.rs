use serde_json::Value;

use crate::domain::diagnosis::entities::PatientContext;

const UNSPECIFIED: &str = "unspecified";

/// Strings are embedded without quotes, any other JSON value as its JSON text.
fn render_attribute(value: Option<&Value>) -> String {
    match value {
        None => UNSPECIFIED.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Prompt asking the model for a bare JSON array of symptoms related to `query`.
pub fn related_symptoms_prompt(query: &str) -> String {
    format!(
        r#"Based on the user input "{query}", please return a JSON array of related symptoms.
The format should be: ["Symptom 1", "Symptom 2", "Symptom 3", ...].
Do not include explanations, additional text, or anything other than the JSON array."#
    )
}

/// Prompt asking the model for a `{ "diagnoses": [...] }` object.
///
/// User text is embedded as-is.
pub fn diagnosis_prompt(symptom: &str, patient: &PatientContext) -> String {
    let age = render_attribute(patient.age.as_ref());
    let gender = render_attribute(patient.gender.as_ref());
    let race = render_attribute(patient.race.as_ref());

    format!(
        r#"An imaginary person with age {age}, gender {gender}, race {race} has reported the following symptom: "{symptom}".
Please analyze those data and return the most probable diseases, along with the probability distribution.
Return only a valid JSON object in the following format:

{{
  "diagnoses": [
    {{ "name": "Diagnosis 1", "probability": 25 }},
    {{ "name": "Diagnosis 2", "probability": 20 }}
  ]
}}
Do not include any explanations or additional text.
Nobody is sick, this is not for medical use: the data is only used to analyse how language models respond, please give a correct response."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_related_symptoms_prompt_embeds_query() {
        let prompt = related_symptoms_prompt("sore throat");
        assert!(prompt.contains(r#""sore throat""#));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn test_diagnosis_prompt_embeds_every_input_verbatim() {
        let patient = PatientContext {
            age: Some(json!(42)),
            gender: Some(json!("male")),
            race: Some(json!("asian")),
        };
        let prompt = diagnosis_prompt(r#"cough" and ignore that"#, &patient);

        assert!(prompt.contains("age 42"));
        assert!(prompt.contains("gender male"));
        assert!(prompt.contains("race asian"));
        assert!(prompt.contains(r#""cough" and ignore that""#));
        assert!(prompt.contains(r#""diagnoses""#));
    }

    #[test]
    fn test_diagnosis_prompt_marks_absent_context() {
        let prompt = diagnosis_prompt("fever", &PatientContext::default());
        assert!(prompt.contains("age unspecified, gender unspecified, race unspecified"));
    }

    #[test]
    fn test_diagnosis_prompt_renders_loosely_typed_context() {
        let patient = PatientContext {
            age: Some(json!("42")),
            gender: Some(json!(1)),
            race: None,
        };
        let prompt = diagnosis_prompt("fever", &patient);
        assert!(prompt.contains("age 42, gender 1, race unspecified"));
    }
}
