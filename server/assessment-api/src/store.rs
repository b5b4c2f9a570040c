//! In-memory repository for the four entity types.
//!
//! The shape the calculators expect from storage: keyed lookups, list by
//! assessment, upsert per (assessment_id, control_id), delete. Ids are
//! auto-incrementing integers. All state lives behind one mutex; handlers
//! clone snapshots out and never hold the lock across an await.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use scoring_engine::types::{
  ActivityLog, Assessment, AssessmentLevel, ControlResponse, ScopingDecision,
};

use crate::types::{
  ActivityPayload, AssessmentPatch, NewAssessment, ResponsePayload, ScopingPayload,
};

struct Inner {
  assessments: HashMap<i64, Assessment>,
  responses: HashMap<i64, ControlResponse>,
  scoping: HashMap<i64, ScopingDecision>,
  activities: HashMap<i64, ActivityLog>,
  next_assessment_id: i64,
  next_response_id: i64,
  next_scoping_id: i64,
  next_activity_id: i64,
}

pub struct MemStore {
  inner: Mutex<Inner>,
}

impl MemStore {
  pub fn new() -> Self {
    Self {
      inner: Mutex::new(Inner {
        assessments: HashMap::new(),
        responses: HashMap::new(),
        scoping: HashMap::new(),
        activities: HashMap::new(),
        next_assessment_id: 1,
        next_response_id: 1,
        next_scoping_id: 1,
        next_activity_id: 1,
      }),
    }
  }

  /// A store pre-populated with the two starter assessments.
  pub fn seeded() -> Self {
    let store = Self::new();
    store.create_assessment(NewAssessment {
      name: "CMMC Initial Assessment".into(),
      level: AssessmentLevel::Level1,
      organization_name: "Example Organization".into(),
    });
    store.create_assessment(NewAssessment {
      name: "CMMC Level 2 Assessment".into(),
      level: AssessmentLevel::Level2,
      organization_name: "Example Organization".into(),
    });
    store
  }

  fn inner(&self) -> MutexGuard<'_, Inner> {
    // A poisoned lock means a panicked handler; the data itself is still
    // consistent (every mutation completes under one lock hold).
    self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
  }

  // -------------------------------------------------------------------------
  // Assessments
  // -------------------------------------------------------------------------

  pub fn assessments(&self) -> Vec<Assessment> {
    let inner = self.inner();
    let mut list: Vec<_> = inner.assessments.values().cloned().collect();
    list.sort_by_key(|a| a.id);
    list
  }

  pub fn assessment(&self, id: i64) -> Option<Assessment> {
    self.inner().assessments.get(&id).cloned()
  }

  pub fn create_assessment(&self, new: NewAssessment) -> Assessment {
    let mut inner = self.inner();
    let id = inner.next_assessment_id;
    inner.next_assessment_id += 1;
    let now = Utc::now();
    let assessment = Assessment {
      id,
      name: new.name,
      level: new.level,
      organization_name: new.organization_name,
      created_at: now,
      updated_at: now,
      completed_percentage: 0,
    };
    inner.assessments.insert(id, assessment.clone());
    assessment
  }

  pub fn update_assessment(&self, id: i64, patch: AssessmentPatch) -> Option<Assessment> {
    let mut inner = self.inner();
    let assessment = inner.assessments.get_mut(&id)?;
    if let Some(name) = patch.name {
      assessment.name = name;
    }
    if let Some(level) = patch.level {
      assessment.level = level;
    }
    if let Some(organization_name) = patch.organization_name {
      assessment.organization_name = organization_name;
    }
    assessment.updated_at = Utc::now();
    Some(assessment.clone())
  }

  pub fn update_completion_percentage(&self, id: i64, percentage: i32) -> Option<Assessment> {
    let mut inner = self.inner();
    let assessment = inner.assessments.get_mut(&id)?;
    assessment.completed_percentage = percentage;
    assessment.updated_at = Utc::now();
    Some(assessment.clone())
  }

  pub fn delete_assessment(&self, id: i64) -> bool {
    self.inner().assessments.remove(&id).is_some()
  }

  // -------------------------------------------------------------------------
  // Control responses
  // -------------------------------------------------------------------------

  pub fn responses(&self, assessment_id: i64) -> Vec<ControlResponse> {
    let inner = self.inner();
    let mut list: Vec<_> = inner
      .responses
      .values()
      .filter(|r| r.assessment_id == assessment_id)
      .cloned()
      .collect();
    list.sort_by_key(|r| r.id);
    list
  }

  pub fn response(&self, assessment_id: i64, control_id: &str) -> Option<ControlResponse> {
    self
      .inner()
      .responses
      .values()
      .find(|r| r.assessment_id == assessment_id && r.control_id == control_id)
      .cloned()
  }

  /// Upsert: the first submission for a control creates the record, later
  /// ones overwrite it in place (same id, fresh timestamp).
  pub fn save_response(&self, assessment_id: i64, payload: ResponsePayload) -> ControlResponse {
    let mut inner = self.inner();
    let now = Utc::now();

    if let Some(response) = inner
      .responses
      .values_mut()
      .find(|r| r.assessment_id == assessment_id && r.control_id == payload.control_id)
    {
      response.status = payload.status;
      response.notes = payload.notes;
      response.evidence = payload.evidence;
      response.updated_at = Some(now);
      return response.clone();
    }

    let id = inner.next_response_id;
    inner.next_response_id += 1;
    let response = ControlResponse {
      id,
      assessment_id,
      control_id: payload.control_id,
      status: payload.status,
      evidence: payload.evidence,
      notes: payload.notes,
      updated_at: Some(now),
    };
    inner.responses.insert(id, response.clone());
    response
  }

  // -------------------------------------------------------------------------
  // Scoping decisions
  // -------------------------------------------------------------------------

  pub fn scoping_decisions(&self, assessment_id: i64) -> Vec<ScopingDecision> {
    let inner = self.inner();
    let mut list: Vec<_> = inner
      .scoping
      .values()
      .filter(|d| d.assessment_id == assessment_id)
      .cloned()
      .collect();
    list.sort_by_key(|d| d.id);
    list
  }

  pub fn save_scoping_decision(
    &self,
    assessment_id: i64,
    payload: ScopingPayload,
  ) -> ScopingDecision {
    let mut inner = self.inner();

    if let Some(decision) = inner
      .scoping
      .values_mut()
      .find(|d| d.assessment_id == assessment_id && d.control_id == payload.control_id)
    {
      decision.applicable = payload.applicable;
      decision.reason = payload.reason;
      return decision.clone();
    }

    let id = inner.next_scoping_id;
    inner.next_scoping_id += 1;
    let decision = ScopingDecision {
      id,
      assessment_id,
      control_id: payload.control_id,
      applicable: payload.applicable,
      reason: payload.reason,
    };
    inner.scoping.insert(id, decision.clone());
    decision
  }

  // -------------------------------------------------------------------------
  // Activity logs
  // -------------------------------------------------------------------------

  /// Most recent first; `limit` caps the returned slice.
  pub fn activity_logs(&self, assessment_id: i64, limit: Option<usize>) -> Vec<ActivityLog> {
    let inner = self.inner();
    let mut list: Vec<_> = inner
      .activities
      .values()
      .filter(|log| log.assessment_id == assessment_id)
      .cloned()
      .collect();
    list.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
    match limit {
      Some(n) => list.into_iter().take(n).collect(),
      None => list,
    }
  }

  pub fn add_activity_log(&self, assessment_id: i64, payload: ActivityPayload) -> ActivityLog {
    let mut inner = self.inner();
    let id = inner.next_activity_id;
    inner.next_activity_id += 1;
    let log = ActivityLog {
      id,
      assessment_id,
      action: payload.action,
      details: payload.details,
      timestamp: Utc::now(),
    };
    inner.activities.insert(id, log.clone());
    log
  }
}

impl Default for MemStore {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use scoring_engine::types::ResponseStatus;

  fn store_with_assessment() -> (MemStore, i64) {
    let store = MemStore::new();
    let assessment = store.create_assessment(NewAssessment {
      name: "Test".into(),
      level: AssessmentLevel::Level2,
      organization_name: "Acme Inc.".into(),
    });
    (store, assessment.id)
  }

  #[test]
  fn seeded_store_has_both_starter_assessments() {
    let store = MemStore::seeded();
    let list = store.assessments();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].level, AssessmentLevel::Level1);
    assert_eq!(list[1].level, AssessmentLevel::Level2);
    assert_eq!(list[0].completed_percentage, 0);
  }

  #[test]
  fn response_upsert_keeps_identity() {
    let (store, id) = store_with_assessment();

    let first = store.save_response(
      id,
      ResponsePayload {
        control_id: "3.1.1".into(),
        status: ResponseStatus::No,
        notes: Some("gap".into()),
        evidence: None,
      },
    );
    let second = store.save_response(
      id,
      ResponsePayload {
        control_id: "3.1.1".into(),
        status: ResponseStatus::Yes,
        notes: None,
        evidence: Some("sso-rollout.pdf".into()),
      },
    );

    assert_eq!(first.id, second.id);
    assert_eq!(second.status, ResponseStatus::Yes);
    assert_eq!(second.notes, None);
    assert_eq!(store.responses(id).len(), 1);
  }

  #[test]
  fn responses_are_scoped_per_assessment() {
    let (store, id) = store_with_assessment();
    let other = store
      .create_assessment(NewAssessment {
        name: "Other".into(),
        level: AssessmentLevel::Level1,
        organization_name: "Acme Inc.".into(),
      })
      .id;

    store.save_response(
      id,
      ResponsePayload {
        control_id: "3.1.1".into(),
        status: ResponseStatus::Yes,
        notes: None,
        evidence: None,
      },
    );

    assert_eq!(store.responses(id).len(), 1);
    assert!(store.responses(other).is_empty());
    assert!(store.response(other, "3.1.1").is_none());
  }

  #[test]
  fn scoping_upsert_overwrites_flag_and_reason() {
    let (store, id) = store_with_assessment();

    let first = store.save_scoping_decision(
      id,
      ScopingPayload {
        control_id: "3.10.1".into(),
        applicable: false,
        reason: Some("fully remote org".into()),
      },
    );
    let second = store.save_scoping_decision(
      id,
      ScopingPayload {
        control_id: "3.10.1".into(),
        applicable: true,
        reason: None,
      },
    );

    assert_eq!(first.id, second.id);
    assert!(second.applicable);
    assert_eq!(store.scoping_decisions(id).len(), 1);
  }

  #[test]
  fn activity_logs_list_newest_first_with_limit() {
    let (store, id) = store_with_assessment();
    for i in 0..3 {
      store.add_activity_log(
        id,
        ActivityPayload {
          action: "updated_control".into(),
          details: serde_json::json!({ "controlId": format!("3.1.{}", i + 1) }),
        },
      );
    }

    let all = store.activity_logs(id, None);
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].details["controlId"], "3.1.3");

    let limited = store.activity_logs(id, Some(2));
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].id, all[0].id);
  }

  #[test]
  fn delete_assessment_reports_presence() {
    let (store, id) = store_with_assessment();
    assert!(store.delete_assessment(id));
    assert!(!store.delete_assessment(id));
    assert!(store.assessment(id).is_none());
  }

  #[test]
  fn completion_percentage_write_back() {
    let (store, id) = store_with_assessment();
    let updated = store.update_completion_percentage(id, 73).unwrap();
    assert_eq!(updated.completed_percentage, 73);
    assert!(store.update_completion_percentage(999, 10).is_none());
  }
}
