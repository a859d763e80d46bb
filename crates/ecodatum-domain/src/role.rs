//! Organization membership roles.

use crate::lookup::lookup_name;

lookup_name! {
    /// Role a user holds inside an organization.
    ///
    /// Creating sites and managing members requires `Administrator`.
    pub enum RoleName {
        Administrator => "ADMINISTRATOR",
        Member => "MEMBER",
    }
}
