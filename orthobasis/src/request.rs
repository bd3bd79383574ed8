//! Plain-data request and response for hosts that marshal JSON
//!
//! Vectors travel as lists of numbers and come back as [`DenseVector`]s.

use orthobasis_core::{ErrorReport, OrthoConfig, OrthoError, Result};
use orthobasis_linalg::DenseVector;
use serde::{Deserialize, Serialize};

use crate::orthogonalizer::Orthogonalizer;
use crate::random::{entropy_source, seeded};
use crate::set::OrthogonalSet;

/// An orthogonalization call expressed as data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrthoRequest {
    /// Input vectors; `null` entries are rejected
    pub vectors: Vec<Option<Vec<f64>>>,
    /// Space dimension for requests without input vectors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<usize>,
    /// Seed for random candidates; the operating system seeds the generator when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default)]
    pub config: OrthoConfig,
}

/// Result of a successful call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrthoResponse {
    pub vectors: Vec<DenseVector>,
    pub norms: Vec<f64>,
    pub num_from_original: usize,
    pub num_generated: usize,
}

impl From<OrthogonalSet<DenseVector>> for OrthoResponse {
    fn from(set: OrthogonalSet<DenseVector>) -> Self {
        Self {
            vectors: set.vectors,
            norms: set.norms,
            num_from_original: set.num_from_original,
            num_generated: set.num_generated,
        }
    }
}

impl OrthoRequest {
    /// Convert the input lists into vectors
    pub fn input_vectors(&self) -> Result<Vec<DenseVector>> {
        self.vectors
            .iter()
            .enumerate()
            .map(|(i, v)| match v {
                Some(data) => DenseVector::from_vec(data.clone()),
                None => Err(OrthoError::null_operand(format!("vectors[{}]", i))),
            })
            .collect()
    }

    pub fn execute(&self) -> Result<OrthoResponse> {
        let input = self.input_vectors()?;
        let template = self.dimension.map(DenseVector::zeros).transpose()?;
        let orthogonalizer = Orthogonalizer::new(self.config.clone());

        let template = template.as_ref();
        let set = match self.seed {
            Some(seed) => orthogonalizer.run_with_template(&input, template, &mut seeded(seed))?,
            None => orthogonalizer.run_with_template(&input, template, &mut entropy_source())?,
        };
        Ok(set.into())
    }
}

/// Parse a JSON request, run it, and serialize either the response or an [`ErrorReport`]
pub fn execute_json(input: &str) -> std::result::Result<String, String> {
    let request: OrthoRequest = serde_json::from_str(input).map_err(|e| {
        let report = ErrorReport::from(&OrthoError::invalid_config(e.to_string()));
        serde_json::to_string(&report).unwrap_or_else(|_| report.to_string())
    })?;

    match request.execute() {
        Ok(response) => serde_json::to_string(&response).map_err(|e| e.to_string()),
        Err(err) => {
            let report = ErrorReport::from(&err);
            Err(serde_json::to_string(&report).unwrap_or_else(|_| report.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orthobasis_core::codes;

    #[test]
    fn test_execute_request() {
        let request = OrthoRequest {
            vectors: vec![Some(vec![1.0, 0.0, 0.0]), Some(vec![1.0, 0.0, 0.0])],
            seed: Some(17),
            config: OrthoConfig::new()
                .with_num_requested(3)
                .with_excess_budget(orthobasis_core::ExcessBudget::Excess(1)),
            ..Default::default()
        };
        let response = request.execute().unwrap();
        assert_eq!(response.vectors.len(), 3);
        assert_eq!(response.norms, vec![1.0, 1.0, 1.0]);
        assert_eq!(response.num_from_original, 1);
    }

    #[test]
    fn test_null_vector_rejected() {
        let request = OrthoRequest {
            vectors: vec![Some(vec![1.0, 0.0]), None],
            ..Default::default()
        };
        assert_eq!(
            request.execute(),
            Err(OrthoError::NullOperand("vectors[1]".to_string()))
        );
    }

    #[test]
    fn test_empty_vector_rejected() {
        let request = OrthoRequest { vectors: vec![Some(vec![])], ..Default::default() };
        assert_eq!(request.execute(), Err(OrthoError::EmptyVector));
    }

    #[test]
    fn test_dimension_without_vectors() {
        let request = OrthoRequest {
            dimension: Some(2),
            seed: Some(5),
            ..Default::default()
        };
        let response = request.execute().unwrap();
        assert_eq!(response.vectors.len(), 2);
        assert_eq!(response.num_from_original, 0);

        let missing = OrthoRequest::default();
        assert_eq!(missing.execute(), Err(OrthoError::UndeterminedDimension));
    }

    #[test]
    fn test_execute_json_success() {
        let input = r#"{
            "vectors": [[3.0, 4.0], [1.0, 0.0]],
            "seed": 1,
            "config": {"normalize": false, "max_excess_generated": -1}
        }"#;
        let output = execute_json(input).unwrap();
        let response: OrthoResponse = serde_json::from_str(&output).unwrap();
        assert_eq!(response.num_from_original, 2);
        assert!((response.norms[0] - 5.0).abs() < 1e-12);
        assert!((response.norms[1] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_execute_json_error_report() {
        let input = r#"{"vectors": [[1.0, 0.0, 0.0]], "config": {"num_requested": 4}}"#;
        let output = execute_json(input).unwrap_err();
        let report: ErrorReport = serde_json::from_str(&output).unwrap();
        assert_eq!(report.code, codes::OVER_REQUESTED_RANK);

        let malformed = execute_json("{not json").unwrap_err();
        assert!(malformed.contains(codes::INVALID_CONFIG));
    }
}
