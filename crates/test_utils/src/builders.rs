//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields under test and take defaults (or a
//! fixture) for everything else.

use core_kernel::CaseData;
use domain_policy::{Criterion, CriterionEvaluation, CriterionStatus, CriterionType};

/// Builder for clinical case data.
#[derive(Debug, Default)]
pub struct CaseDataBuilder {
    data: CaseData,
}

impl CaseDataBuilder {
    /// Creates a builder over empty (all-default) case data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder seeded from an existing fixture.
    pub fn from_fixture(data: CaseData) -> Self {
        Self { data }
    }

    /// Sets the documented disease stage.
    pub fn stage(mut self, stage: impl Into<String>) -> Self {
        self.data.disease_stage.stage = stage.into();
        self
    }

    /// Replaces the metastatic site list.
    pub fn metastatic_sites(mut self, sites: Vec<String>) -> Self {
        self.data.disease_stage.metastatic_sites = sites;
        self
    }

    /// Sets the PD-L1 result.
    pub fn pd_l1(mut self, status: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.biomarkers.pd_l1.status = status.into();
        self.data.biomarkers.pd_l1.value = value.into();
        self
    }

    /// Sets the EGFR result.
    pub fn egfr(mut self, status: impl Into<String>, mutation: impl Into<String>) -> Self {
        self.data.biomarkers.egfr.status = status.into();
        self.data.biomarkers.egfr.mutation = mutation.into();
        self
    }

    /// Sets the ALK result.
    pub fn alk(mut self, status: impl Into<String>) -> Self {
        self.data.biomarkers.alk.status = status.into();
        self
    }

    /// Sets the ECOG performance score.
    pub fn ecog(mut self, ecog: impl Into<String>) -> Self {
        self.data.performance_status.ecog = ecog.into();
        self
    }

    /// Records prior systemic treatments.
    pub fn prior_treatments(mut self, treatments: Vec<String>) -> Self {
        self.data.prior_therapy.has_prior_systemic = !treatments.is_empty();
        self.data.prior_therapy.treatments = treatments;
        self
    }

    pub fn build(self) -> CaseData {
        self.data
    }
}

/// Builder for policy criteria.
#[derive(Debug)]
pub struct CriterionBuilder {
    criterion: Criterion,
}

impl CriterionBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            criterion: Criterion {
                id: id.into(),
                description: String::new(),
                criterion_type: CriterionType::Clinical,
                required: true,
            },
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.criterion.description = description.into();
        self
    }

    pub fn criterion_type(mut self, criterion_type: CriterionType) -> Self {
        self.criterion.criterion_type = criterion_type;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.criterion.required = required;
        self
    }

    pub fn build(self) -> Criterion {
        self.criterion
    }
}

/// Builder for evaluation records, for tests exercising the triage
/// aggregators directly without running the evaluation engine.
#[derive(Debug)]
pub struct EvaluationBuilder {
    evaluation: CriterionEvaluation,
}

impl EvaluationBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            evaluation: CriterionEvaluation {
                id: id.into(),
                description: String::new(),
                criterion_type: CriterionType::Clinical,
                required: true,
                status: CriterionStatus::Unknown,
                evidence: String::new(),
                details: String::new(),
            },
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.evaluation.required = required;
        self
    }

    pub fn met(mut self) -> Self {
        self.evaluation.status = CriterionStatus::Met;
        self
    }

    pub fn unmet(mut self) -> Self {
        self.evaluation.status = CriterionStatus::Unmet;
        self
    }

    pub fn unknown(mut self) -> Self {
        self.evaluation.status = CriterionStatus::Unknown;
        self
    }

    pub fn evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evaluation.evidence = evidence.into();
        self
    }

    pub fn build(self) -> CriterionEvaluation {
        self.evaluation
    }
}
