#[cfg(test)]
mod tests {
    use serde_json::json;
    use triage_score::*;

    #[test]
    fn test_empty_object_takes_all_defaults() {
        let assessment = assessment_from_json(&json!({}), &TriageConfig::default()).unwrap();
        assert_eq!(assessment, Assessment::default());
        assert_eq!(assessment.can_bear_weight, Answer::Unknown);
        assert_eq!(assessment.worsened_symptoms, Answer::Unknown);
    }

    #[test]
    fn test_full_payload() {
        let payload = json!({
            "fever_above_102": true,
            "urgent_symptoms": ["confusion", "persistent_vomiting"],
            "severe_pain": false,
            "infection_symptoms": ["Fever with shaking chills"],
            "has_immune_condition": true,
            "recent_fall": true,
            "can_bear_weight": false,
            "has_chronic_condition": true,
            "worsened_symptoms": true,
            "mental_health_concerns": ["Sudden confusion or memory loss"],
            "daily_assistance_needs": ["Bathing", "Eating"],
            "medication_management_issues": true,
            "nutrition_concerns": false,
            "social_isolation": true
        });

        let assessment = assessment_from_json(&payload, &TriageConfig::default()).unwrap();
        assert!(assessment.fever_above_102);
        assert_eq!(assessment.urgent_symptoms.len(), 2);
        assert!(assessment.urgent_symptoms.contains(&UrgentSymptom::Confusion));
        assert!(assessment.urgent_symptoms.contains(&UrgentSymptom::PersistentVomiting));
        assert_eq!(assessment.infection_symptoms, vec!["Fever with shaking chills"]);
        assert_eq!(assessment.can_bear_weight, Answer::No);
        assert_eq!(assessment.worsened_symptoms, Answer::Yes);
        assert_eq!(assessment.daily_assistance_needs.len(), 2);
        assert!(assessment.social_isolation);

        // 20 + 35 + 15 + 20 + 25 + 10 + 6 + 5 + 2
        assert_eq!(evaluate(&assessment).score, 100);
    }

    #[test]
    fn test_unrecognized_urgent_symptoms_are_dropped() {
        let payload = json!({
            "urgent_symptoms": ["confusion", "hiccups", "Persistent vomiting", "confusion"]
        });
        let assessment = assessment_from_json(&payload, &TriageConfig::default()).unwrap();
        assert_eq!(assessment.urgent_symptoms.len(), 2);
        assert_eq!(evaluate(&assessment).score, 35);
    }

    #[test]
    fn test_free_text_lists_keep_duplicates() {
        let payload = json!({ "infection_symptoms": ["chills", "chills", "chills"] });
        let assessment = assessment_from_json(&payload, &TriageConfig::default()).unwrap();
        assert_eq!(assessment.infection_symptoms.len(), 3);
        assert_eq!(evaluate(&assessment).score, 30);
    }

    #[test]
    fn test_survey_form_drops_none_of_the_above() {
        let payload = json!({
            "urgent_symptoms": ["None of the above"],
            "infection_symptoms": ["None of the above"],
            "daily_assistance_needs": ["Bathing", "None of the above"]
        });

        let lenient = assessment_from_json(&payload, &TriageConfig::default()).unwrap();
        assert_eq!(lenient.infection_symptoms.len(), 1);
        assert_eq!(lenient.daily_assistance_needs.len(), 2);

        let form = assessment_from_json(&payload, &TriageConfig::survey_form()).unwrap();
        assert!(form.urgent_symptoms.is_empty());
        assert!(form.infection_symptoms.is_empty());
        assert_eq!(form.daily_assistance_needs, vec!["Bathing"]);
        assert!(!requires_urgent_care(&form));
    }

    #[test]
    fn test_wrong_type_fails_fast_with_field_name() {
        let payload = json!({ "fever_above_102": "yes" });
        let err = assessment_from_json(&payload, &TriageConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            TriageError::InvalidField { ref field, .. } if field == "fever_above_102"
        ));
        assert!(err.to_string().contains("invalid field `fever_above_102`"));

        let payload = json!({ "can_bear_weight": 0 });
        let err = assessment_from_json(&payload, &TriageConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            TriageError::InvalidField { ref field, expected: "boolean or null", found: "number" }
                if field == "can_bear_weight"
        ));

        let payload = json!({ "urgent_symptoms": "confusion" });
        let err = assessment_from_json(&payload, &TriageConfig::default()).unwrap_err();
        assert!(matches!(err, TriageError::InvalidField { expected: "array of strings", .. }));
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        let err = assessment_from_json(&json!([1, 2]), &TriageConfig::default()).unwrap_err();
        assert!(matches!(err, TriageError::InvalidPayload(_)));
    }

    #[test]
    fn test_unknown_fields() {
        let payload = json!({ "fever_above_102": true, "patient_name": "x" });

        let assessment = assessment_from_json(&payload, &TriageConfig::default()).unwrap();
        assert!(assessment.fever_above_102);

        let strict = TriageConfig {
            reject_unknown_fields: true,
            ..TriageConfig::default()
        };
        let err = assessment_from_json(&payload, &strict).unwrap_err();
        assert!(matches!(err, TriageError::UnknownField(ref key) if key == "patient_name"));
    }

    #[test]
    fn test_array_payload() {
        let payload = json!([{ "severe_pain": true }, { "recent_fall": true }]);
        let assessments = assessments_from_json(&payload, &TriageConfig::default()).unwrap();
        assert_eq!(assessments.len(), 2);
        assert!(assessments[0].severe_pain);
        assert!(assessments[1].recent_fall);

        let single = assessments_from_json(&json!({}), &TriageConfig::default()).unwrap();
        assert_eq!(single.len(), 1);

        let err = assessments_from_json(&json!([{}, 3]), &TriageConfig::default()).unwrap_err();
        assert!(err.to_string().contains("item 1"));
    }

    #[test]
    fn test_batch_field_errors_carry_item_index() {
        let payload = json!([{ "severe_pain": true }, { "severe_pain": "very" }]);
        let err = assessments_from_json(&payload, &TriageConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("item 1: invalid field `severe_pain`"));
        match err {
            TriageError::BatchItem { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(
                    *source,
                    TriageError::InvalidField { ref field, .. } if field == "severe_pain"
                ));
            }
            other => panic!("unexpected error: {other}"),
        }

        let strict = TriageConfig {
            reject_unknown_fields: true,
            ..TriageConfig::default()
        };
        let err = assessments_from_json(&json!([{}, {}, { "notes": "" }]), &strict).unwrap_err();
        assert_eq!(err.to_string(), "item 2: unknown field `notes`");
    }

    #[test]
    fn test_partial_payload_with_null_answer() {
        let payload = json!({
            "recent_fall": true,
            "can_bear_weight": null,
            "has_chronic_condition": true
        });
        let assessment = assessment_from_json(&payload, &TriageConfig::default()).unwrap();
        assert_eq!(assessment.can_bear_weight, Answer::Unknown);
        assert_eq!(assessment.worsened_symptoms, Answer::Unknown);
        assert!(assessment.infection_symptoms.is_empty());
        assert!(!assessment.severe_pain);

        // unconfirmed weight-bearing scores the fall, unknown worsening does not
        assert_eq!(evaluate(&assessment).score, 20);
    }
}
