// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use serde::{Deserialize, Serialize};

/// The entity that initiated an admission.
///
/// Usually the member themselves, but an operator admitting on someone's
/// behalf or an automated import are recorded the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "member", "operator", "system").
    pub actor_type: String,
}

impl Actor {
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }

    /// Convenience constructor for a member acting on their own account.
    #[must_use]
    pub fn member(user_id: i64) -> Self {
        Self::new(user_id.to_string(), String::from("member"))
    }
}

/// Why the admission was attempted (request id, payment session, import batch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    pub id: String,
    pub description: String,
}

impl Cause {
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// What was done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The action name (e.g., "`Admit`").
    pub name: String,
    /// Free-form details such as the product and amount.
    pub details: Option<String>,
}

impl Action {
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// The company an event belongs to.
///
/// Audit history is always read per company, so every event carries both
/// the numeric id and the human-facing code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyScope {
    pub company_id: i64,
    pub company_code: String,
}

impl CompanyScope {
    #[must_use]
    pub fn new(company_id: i64, company_code: &str) -> Self {
        Self {
            company_id,
            company_code: company_code.to_string(),
        }
    }
}

/// An immutable record of one successful admission.
///
/// Every committed admission produces exactly one audit event, written in the
/// same transaction as the purchase. Rejections produce none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Assigned by storage. `None` until the event has been persisted.
    pub event_id: Option<i64>,
    pub actor: Actor,
    pub cause: Cause,
    pub action: Action,
    pub scope: CompanyScope,
    /// The member the admission was made for.
    pub user_id: i64,
}

impl AuditEvent {
    /// Creates an event that has not been persisted yet.
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        scope: CompanyScope,
        user_id: i64,
    ) -> Self {
        Self {
            event_id: None,
            actor,
            cause,
            action,
            scope,
            user_id,
        }
    }

    /// Returns a copy of this event carrying the id assigned by storage.
    #[must_use]
    pub fn with_event_id(mut self, event_id: i64) -> Self {
        self.event_id = Some(event_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> AuditEvent {
        AuditEvent::new(
            Actor::member(100),
            Cause::new(String::from("req-456"), String::from("Member checkout")),
            Action::new(
                String::from("Admit"),
                Some(String::from("product=11 locker=false total=100000")),
            ),
            CompanyScope::new(1, "ACME"),
            100,
        )
    }

    #[test]
    fn test_member_actor() {
        let actor = Actor::member(42);

        assert_eq!(actor.id, "42");
        assert_eq!(actor.actor_type, "member");
    }

    #[test]
    fn test_new_event_is_unpersisted() {
        let event = sample_event();

        assert_eq!(event.event_id, None);
        assert_eq!(event.scope.company_code, "ACME");
        assert_eq!(event.user_id, 100);
    }

    #[test]
    fn test_with_event_id_keeps_other_fields() {
        let event = sample_event();
        let stored = event.clone().with_event_id(7);

        assert_eq!(stored.event_id, Some(7));
        assert_eq!(stored.actor, event.actor);
        assert_eq!(stored.cause, event.cause);
        assert_eq!(stored.action, event.action);
        assert_eq!(stored.scope, event.scope);
    }

    #[test]
    fn test_action_without_details() {
        let action = Action::new(String::from("Admit"), None);

        assert_eq!(action.name, "Admit");
        assert_eq!(action.details, None);
    }

    #[test]
    fn test_actor_equality() {
        assert_eq!(Actor::member(1), Actor::member(1));
        assert_ne!(Actor::member(1), Actor::member(2));
        assert_ne!(
            Actor::member(1),
            Actor::new(String::from("1"), String::from("operator"))
        );
    }
}
