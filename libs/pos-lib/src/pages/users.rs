use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::info;

use super::{confirm_delete, Confirm, Deletion, ResourcePage};
use crate::api::{NewUser, PosApi, UserUpdate};
use crate::entities::{Id, Role, SessionUser, User};
use crate::errors::PosError;
use crate::guard::AuthGuard;
use crate::policy::{self, Capability};
use crate::validation;

/// Fields of the add/edit user dialog. A blank password on edit keeps the
/// current one.
#[derive(Debug)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub password: Option<SecretString>,
    pub role: Role,
    /// Owning staff_admin. Only an admin picks this; a staff_admin always
    /// owns what they create.
    pub created_by: Option<Id>,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: None,
            role: Role::Kasir,
            created_by: None,
        }
    }
}

impl UserForm {
    /// Prefills the edit dialog. The password stays empty so the current one
    /// is kept unless a new one is typed.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            password: None,
            role: user.role,
            created_by: user.created_by,
        }
    }

    /// Changes the role, unlinking the owner when the new role cannot have one.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        if !policy::can_have_owner(role) {
            self.created_by = None;
        }
    }

    fn password(&self) -> Option<SecretString> {
        self.password
            .as_ref()
            .map(|p| p.expose_secret().trim().to_string())
            .filter(|p| !p.is_empty())
            .map(SecretString::new)
    }

    fn check_role(&self, viewer: &SessionUser) -> Result<(), PosError> {
        if policy::assignable_roles(viewer.role).contains(&self.role) {
            Ok(())
        } else {
            Err(PosError::validation(format!(
                "a {} may not assign the {} role",
                viewer.role, self.role
            )))
        }
    }

    fn owner(&self, viewer: &SessionUser) -> Result<Option<Id>, PosError> {
        match viewer.role {
            Role::StaffAdmin => match self.created_by {
                Some(owner) if owner != viewer.id => Err(PosError::validation(
                    "a staff_admin can only own the accounts they create",
                )),
                _ => Ok(Some(viewer.id)),
            },
            _ => match self.created_by {
                Some(_) if !policy::can_have_owner(self.role) => Err(PosError::validation(
                    "only staff and kasir accounts can be linked to a staff_admin",
                )),
                owner => Ok(owner),
            },
        }
    }

    fn validate_new(&self, viewer: &SessionUser) -> Result<NewUser, PosError> {
        let [name, email] = validation::all_required([
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
        ])?;
        let password = self
            .password()
            .ok_or_else(|| PosError::validation("password is required"))?;
        self.check_role(viewer)?;

        Ok(NewUser {
            name,
            email,
            password,
            role: self.role,
            created_by: self.owner(viewer)?,
        })
    }

    fn validate_update(&self, viewer: &SessionUser) -> Result<UserUpdate, PosError> {
        let [name, email] = validation::all_required([
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
        ])?;
        self.check_role(viewer)?;

        Ok(UserUpdate {
            name,
            email,
            role: self.role,
            password: self.password(),
            created_by: self.owner(viewer)?,
        })
    }
}

/// User management. What the list contains is decided by the server: an
/// admin gets every account, a staff_admin only the accounts they own.
pub struct UsersPage<A: PosApi> {
    api: Arc<A>,
    viewer: SessionUser,
    users: Vec<User>,
    loads: usize,
}

impl<A: PosApi> UsersPage<A> {
    pub async fn open(guard: &AuthGuard<A>) -> Result<Self, PosError> {
        let viewer = guard.enter(Self::CAPABILITY).await?;
        let mut page = Self {
            api: Arc::clone(guard.api()),
            viewer,
            users: Vec::new(),
            loads: 0,
        };
        page.load().await?;
        Ok(page)
    }

    pub fn viewer(&self) -> &SessionUser {
        &self.viewer
    }

    /// Roles offered in the role field for this viewer.
    pub fn assignable_roles(&self) -> &'static [Role] {
        policy::assignable_roles(self.viewer.role)
    }

    /// staff_admin accounts an admin can link new staff/kasir accounts to.
    pub fn owner_candidates(&self) -> Vec<&User> {
        if self.viewer.role != Role::Admin {
            return Vec::new();
        }
        self.users
            .iter()
            .filter(|u| u.role == Role::StaffAdmin)
            .collect()
    }

    fn created_by_filter(&self) -> Option<Id> {
        (self.viewer.role == Role::StaffAdmin).then_some(self.viewer.id)
    }

    pub async fn create(&mut self, form: &UserForm) -> Result<(), PosError> {
        let user = form.validate_new(&self.viewer)?;
        self.api.create_user(&user).await?;
        info!(email = %user.email, role = %user.role, created_by = ?user.created_by, "user created");
        self.after_mutation().await
    }

    pub async fn update(&mut self, id: Id, form: &UserForm) -> Result<(), PosError> {
        let update = form.validate_update(&self.viewer)?;
        self.api.update_user(id, &update).await?;
        info!(
            user_id = id,
            password_changed = update.password.is_some(),
            "user updated"
        );
        self.after_mutation().await
    }

    pub async fn delete(&mut self, id: Id, confirm: &dyn Confirm) -> Result<Deletion, PosError> {
        let label = self
            .users
            .iter()
            .find(|u| u.id == id)
            .map_or_else(|| format!("#{id}"), |u| u.email.clone());
        if !confirm_delete(confirm, "user", &label).await {
            return Ok(Deletion::Cancelled);
        }
        self.api.delete_user(id).await?;
        info!(user_id = id, "user deleted");
        self.after_mutation().await?;
        Ok(Deletion::Deleted)
    }
}

#[async_trait]
impl<A: PosApi> ResourcePage for UsersPage<A> {
    type Item = User;
    const CAPABILITY: Capability = Capability::ManageUsers;

    async fn load(&mut self) -> Result<(), PosError> {
        self.users = self.api.list_users(self.created_by_filter()).await?;
        self.loads += 1;
        Ok(())
    }

    fn items(&self) -> &[User] {
        &self.users
    }

    fn load_count(&self) -> usize {
        self.loads
    }
}
