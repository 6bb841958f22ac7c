//! Canonical classification families.

use super::Classification;

ranked_classification! {
    /// Risk attached to a supplier, shipment or assessment.
    pub enum RiskLevel in "risk level" {
        Low = "LOW" ("Low") rank 1,
        Medium = "MEDIUM" ("Medium") rank 2,
        High = "HIGH" ("High") rank 3,
        Critical = "CRITICAL" ("Critical") rank 4,
    }
}

ranked_classification! {
    /// Severity of a raised alert.
    pub enum AlertSeverity in "alert severity" {
        Info = "INFO" rank 1,
        Warning = "WARNING" rank 2,
        Error = "ERROR" rank 3,
        Critical = "CRITICAL" rank 4,
    }
}

classification! {
    /// Where a shipment is in its lifecycle. Transition rules live with the
    /// shipment service, not here.
    pub enum ShipmentStatus in "shipment status" {
        Pending = "PENDING" ("Pending"),
        InTransit = "IN_TRANSIT" ("In Transit"),
        Delayed = "DELAYED" ("Delayed"),
        Delivered = "DELIVERED" ("Delivered"),
        Cancelled = "CANCELLED" ("Cancelled"),
        Lost = "LOST" ("Lost"),
    }
}

classification! {
    pub enum SupplierStatus in "supplier status" {
        Active = "ACTIVE" ("Active"),
        Inactive = "INACTIVE" ("Inactive"),
        Suspended = "SUSPENDED" ("Suspended"),
        UnderReview = "UNDER_REVIEW" ("Under Review"),
    }
}

classification! {
    /// Access level of a platform user.
    pub enum UserRole in "user role" {
        /// Full access, including user management.
        Admin = "ADMIN" ("Administrator"),
        /// Manages supply chain data and analytics.
        SupplyManager = "SUPPLY_MANAGER" ("Supply Manager"),
        /// Read-only.
        Viewer = "VIEWER" ("Viewer"),
    }
}

impl UserRole {
    pub fn is_admin(self) -> bool {
        self == UserRole::Admin
    }

    pub fn can_manage(self) -> bool {
        matches!(self, UserRole::Admin | UserRole::SupplyManager)
    }

    /// Authority name, e.g. `ROLE_ADMIN`.
    pub fn authority(self) -> String {
        format!("ROLE_{}", self.wire_value())
    }
}
