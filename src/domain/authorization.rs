//! Resource authorization
//!
//! Every HTTP resource declares a [`ResourcePolicy`]: which operations it
//! exposes and which [`AccessRule`] gates each of them. Services evaluate the
//! policy against the acting [`Actor`] before touching storage.

use super::user::UserRole;
use crate::shared::{DomainError, DomainResult};

/// Anything that can act on a resource.
pub trait Actor: Send + Sync {
    fn actor_id(&self) -> &str;

    fn role(&self) -> UserRole;

    fn is_superuser(&self) -> bool {
        self.role() == UserRole::Superuser
    }
}

/// Resource operations, in the usual list/create/retrieve/update/delete shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Retrieve,
    Create,
    Update,
    PartialUpdate,
    Destroy,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Retrieve => "retrieve",
            Self::Create => "create",
            Self::Update => "update",
            Self::PartialUpdate => "partial_update",
            Self::Destroy => "destroy",
        }
    }
}

/// Who may perform an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRule {
    Anyone,
    Authenticated,
    Superuser,
}

/// Per-resource table of enabled operations and their access rules.
///
/// `None` means the operation is not exposed at all.
#[derive(Debug, Clone, Copy)]
pub struct ResourcePolicy {
    pub resource: &'static str,
    pub list: Option<AccessRule>,
    pub retrieve: Option<AccessRule>,
    pub create: Option<AccessRule>,
    pub update: Option<AccessRule>,
    pub partial_update: Option<AccessRule>,
    pub destroy: Option<AccessRule>,
}

impl ResourcePolicy {
    /// Reads for any authenticated user, writes for superusers only.
    pub const fn catalog(resource: &'static str) -> Self {
        Self {
            resource,
            list: Some(AccessRule::Authenticated),
            retrieve: Some(AccessRule::Authenticated),
            create: Some(AccessRule::Superuser),
            update: Some(AccessRule::Superuser),
            partial_update: Some(AccessRule::Superuser),
            destroy: Some(AccessRule::Superuser),
        }
    }

    /// Every operation enabled for any authenticated user.
    pub const fn authenticated(resource: &'static str) -> Self {
        Self {
            resource,
            list: Some(AccessRule::Authenticated),
            retrieve: Some(AccessRule::Authenticated),
            create: Some(AccessRule::Authenticated),
            update: Some(AccessRule::Authenticated),
            partial_update: Some(AccessRule::Authenticated),
            destroy: Some(AccessRule::Authenticated),
        }
    }

    /// Only `list` is exposed.
    pub const fn list_only(resource: &'static str, rule: AccessRule) -> Self {
        Self {
            resource,
            list: Some(rule),
            retrieve: None,
            create: None,
            update: None,
            partial_update: None,
            destroy: None,
        }
    }

    /// Only `create` is exposed.
    pub const fn create_only(resource: &'static str, rule: AccessRule) -> Self {
        Self {
            resource,
            list: None,
            retrieve: None,
            create: Some(rule),
            update: None,
            partial_update: None,
            destroy: None,
        }
    }

    pub fn rule_for(&self, op: Operation) -> Option<AccessRule> {
        match op {
            Operation::List => self.list,
            Operation::Retrieve => self.retrieve,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::PartialUpdate => self.partial_update,
            Operation::Destroy => self.destroy,
        }
    }

    pub fn is_enabled(&self, op: Operation) -> bool {
        self.rule_for(op).is_some()
    }

    /// Check that `actor` may perform `op` on this resource.
    pub fn authorize(&self, actor: Option<&dyn Actor>, op: Operation) -> DomainResult<()> {
        let Some(rule) = self.rule_for(op) else {
            return Err(DomainError::OperationDisabled(op.as_str()));
        };

        match (rule, actor) {
            (AccessRule::Anyone, _) => Ok(()),
            (_, None) => Err(DomainError::Unauthorized(
                "Authentication credentials were not provided".into(),
            )),
            (AccessRule::Authenticated, Some(_)) => Ok(()),
            (AccessRule::Superuser, Some(actor)) if actor.is_superuser() => Ok(()),
            (AccessRule::Superuser, Some(_)) => Err(DomainError::Forbidden(format!(
                "Only a superuser may {} {}",
                op.as_str(),
                self.resource
            ))),
        }
    }
}

pub const HOTEL_POLICY: ResourcePolicy = ResourcePolicy::catalog("hotels");
pub const ROOM_POLICY: ResourcePolicy = ResourcePolicy::catalog("rooms");
pub const ROOM_SEARCH_POLICY: ResourcePolicy =
    ResourcePolicy::list_only("hotel-rooms", AccessRule::Authenticated);
pub const RESERVATION_POLICY: ResourcePolicy = ResourcePolicy::authenticated("reservations");
pub const REGISTRATION_POLICY: ResourcePolicy =
    ResourcePolicy::create_only("users", AccessRule::Anyone);

#[cfg(test)]
mod tests {
    use super::*;

    struct TestActor(UserRole);

    impl Actor for TestActor {
        fn actor_id(&self) -> &str {
            "test"
        }

        fn role(&self) -> UserRole {
            self.0
        }
    }

    #[test]
    fn catalog_reads_allowed_for_regular_users() {
        let actor = TestActor(UserRole::Regular);
        assert!(HOTEL_POLICY.authorize(Some(&actor), Operation::List).is_ok());
        assert!(HOTEL_POLICY.authorize(Some(&actor), Operation::Retrieve).is_ok());
    }

    #[test]
    fn catalog_writes_forbidden_for_regular_users() {
        let actor = TestActor(UserRole::Regular);
        for op in [
            Operation::Create,
            Operation::Update,
            Operation::PartialUpdate,
            Operation::Destroy,
        ] {
            let err = ROOM_POLICY.authorize(Some(&actor), op).unwrap_err();
            assert!(matches!(err, DomainError::Forbidden(_)), "{op:?}");
        }
    }

    #[test]
    fn catalog_writes_allowed_for_superuser() {
        let actor = TestActor(UserRole::Superuser);
        assert!(HOTEL_POLICY.authorize(Some(&actor), Operation::Create).is_ok());
        assert!(HOTEL_POLICY.authorize(Some(&actor), Operation::Destroy).is_ok());
    }

    #[test]
    fn anonymous_actor_is_unauthorized() {
        let err = RESERVATION_POLICY
            .authorize(None, Operation::List)
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }

    #[test]
    fn registration_is_open_to_anyone() {
        assert!(REGISTRATION_POLICY.authorize(None, Operation::Create).is_ok());
    }

    #[test]
    fn disabled_operations_are_rejected() {
        let actor = TestActor(UserRole::Superuser);
        assert!(!ROOM_SEARCH_POLICY.is_enabled(Operation::Create));
        let err = ROOM_SEARCH_POLICY
            .authorize(Some(&actor), Operation::Create)
            .unwrap_err();
        assert!(matches!(err, DomainError::OperationDisabled("create")));
    }
}
