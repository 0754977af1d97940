//! Knowledge group data model.
//!
//! A knowledge group is a named, owned placeholder with an optional
//! description. Groups are created once and never updated; the store assigns
//! the identifier.

use std::fmt;

use thiserror::Error;

/// Validation errors returned by the knowledge group value constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnowledgeGroupValidationError {
    /// The store-assigned identifier is empty.
    #[error("knowledge group id must not be empty")]
    EmptyId,
    /// The group name has no characters.
    #[error("name must not be empty")]
    EmptyName,
}

/// Opaque identifier assigned by the document store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KnowledgeGroupId(String);

impl KnowledgeGroupId {
    /// Validate and construct an identifier.
    pub fn new(id: impl Into<String>) -> Result<Self, KnowledgeGroupValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(KnowledgeGroupValidationError::EmptyId);
        }
        Ok(Self(id))
    }
}

/// Human readable group name.
///
/// The value is kept exactly as supplied, whitespace included; only the
/// empty string is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupName(String);

impl GroupName {
    /// Validate and construct a [`GroupName`].
    ///
    /// # Examples
    /// ```
    /// use knowledge_backend::domain::{GroupName, KnowledgeGroupValidationError};
    ///
    /// assert!(GroupName::new("My Group").is_ok());
    /// assert!(GroupName::new("  ").is_ok());
    /// assert_eq!(GroupName::new(""), Err(KnowledgeGroupValidationError::EmptyName));
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, KnowledgeGroupValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(KnowledgeGroupValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

/// Identity of the caller that owns a group, trusted verbatim from the
/// request header. Any value, the empty string included, is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Owner(String);

impl Owner {
    /// Wrap an owner identity.
    pub fn new(owner: impl Into<String>) -> Self {
        Self(owner.into())
    }
}

macro_rules! string_newtype_impls {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $ty {
                /// Borrow the underlying value.
                pub fn as_str(&self) -> &str {
                    self.0.as_str()
                }
            }

            impl AsRef<str> for $ty {
                fn as_ref(&self) -> &str {
                    self.as_str()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.0
                }
            }
        )*
    };
}

string_newtype_impls!(KnowledgeGroupId, GroupName, Owner);

/// A knowledge group that has been validated but not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewKnowledgeGroup {
    name: GroupName,
    description: Option<String>,
    owner: Owner,
}

impl NewKnowledgeGroup {
    /// Assemble a draft from validated parts.
    pub fn new(name: GroupName, description: Option<String>, owner: Owner) -> Self {
        Self {
            name,
            description,
            owner,
        }
    }

    /// Requested group name.
    pub fn name(&self) -> &GroupName {
        &self.name
    }

    /// Optional free-text description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Caller that will own the group.
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Attach the identifier assigned by the store.
    pub fn into_persisted(self, id: KnowledgeGroupId) -> KnowledgeGroup {
        KnowledgeGroup {
            id,
            name: self.name,
            description: self.description,
            created_by: self.owner,
        }
    }
}

/// Persisted knowledge group.
///
/// ## Invariants
/// - `id` is non-empty and assigned by the store.
/// - `name` is non-empty.
/// - `created_by` holds the owner header value verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeGroup {
    id: KnowledgeGroupId,
    name: GroupName,
    description: Option<String>,
    created_by: Owner,
}

impl KnowledgeGroup {
    /// Rebuild a group from stored fields, validating each one.
    ///
    /// # Examples
    /// ```
    /// use knowledge_backend::domain::KnowledgeGroup;
    ///
    /// let group = KnowledgeGroup::try_from_parts(
    ///     "507f1f77bcf86cd799439011",
    ///     "My Group",
    ///     None,
    ///     "user-123",
    /// )
    /// .expect("valid group");
    /// assert_eq!(group.created_by().as_str(), "user-123");
    /// ```
    pub fn try_from_parts(
        id: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
        created_by: impl Into<String>,
    ) -> Result<Self, KnowledgeGroupValidationError> {
        Ok(Self {
            id: KnowledgeGroupId::new(id)?,
            name: GroupName::new(name)?,
            description,
            created_by: Owner::new(created_by),
        })
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> &KnowledgeGroupId {
        &self.id
    }

    /// Group name as supplied at creation.
    pub fn name(&self) -> &GroupName {
        &self.name
    }

    /// Description as supplied at creation; `None` when absent or null.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Owner recorded at creation.
    pub fn created_by(&self) -> &Owner {
        &self.created_by
    }
}
