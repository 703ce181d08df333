//! Front-of-house integration: intake and directory registries wired to the
//! same notification sink as the session authority, the way the console
//! composes them.

use std::sync::Arc;

use optiqueue::auth::{default_roster, SessionAuthority};
use optiqueue::directory::{DirectoryError, NewStaffUser, StaffRole, UserDirectory};
use optiqueue::error::AppError;
use optiqueue::intake::{CustomerBook, NewCustomer, PriorityType, QueueStatus};
use optiqueue::notify::{MemorySink, Variant};

struct FrontOfHouse {
    auth: SessionAuthority,
    directory: UserDirectory,
    book: CustomerBook,
    sink: Arc<MemorySink>,
}

impl FrontOfHouse {
    fn new() -> Self {
        let sink = Arc::new(MemorySink::new());
        FrontOfHouse {
            auth: SessionAuthority::new(Arc::new(default_roster().clone()), sink.clone()),
            directory: UserDirectory::with_mock_users(sink.clone()),
            book: CustomerBook::new(sink.clone()),
            sink,
        }
    }
}

#[test]
fn sales_shift_registers_walk_ins() {
    let foh = FrontOfHouse::new();
    assert!(foh.auth.login("ace", "sales123"));
    assert!(foh.auth.has_role("sales"), "sales gate open for sales staff");

    let customer = foh
        .book
        .register(NewCustomer {
            name: "Maria Cruz".into(),
            contact_number: "0917 555 0101".into(),
            sales_agent: "ace".into(),
            priority: PriorityType::Priority,
            ..NewCustomer::default()
        })
        .expect("valid registration");

    assert_eq!(customer.status, QueueStatus::Waiting);
    assert_eq!(foh.book.waiting().len(), 1);

    let toasts = foh.sink.drain();
    assert_eq!(toasts.last().unwrap().description, "Customer registered successfully");
}

#[test]
fn sales_staff_cannot_reach_the_admin_screen() {
    let foh = FrontOfHouse::new();
    foh.auth.login("ace", "sales123");
    assert!(!foh.auth.has_role("admin"));
    // The directory itself is reachable in-process; the role gate is the
    // calling screen's responsibility.
    assert_eq!(foh.directory.len(), 9);
}

#[test]
fn admin_manages_the_staff_directory() {
    let foh = FrontOfHouse::new();
    assert!(foh.auth.login("admin", "admin"));
    assert!(foh.auth.has_role("admin"));

    let created = foh
        .directory
        .create_user(NewStaffUser {
            name: "Nina".into(),
            email: "nina@escaoptical.com".into(),
            password: "pw123".into(),
            role: StaffRole::Cashier,
        })
        .expect("valid staff user");
    assert_eq!(created.id, "10");

    foh.directory.update_role("10", StaffRole::SalesEmployee).unwrap();
    let users = foh.directory.list();
    assert_eq!(users.last().unwrap().role, StaffRole::SalesEmployee);

    let err = foh.directory.update_role("99", StaffRole::Admin).unwrap_err();
    assert_eq!(err, DirectoryError::UnknownUser("99".into()));
    let n = foh.sink.last().unwrap();
    assert_eq!(n.variant, Variant::Destructive);
}

#[test]
fn directory_and_session_role_vocabularies_stay_distinct() {
    // The directory spells its middle tier 'sales_employee'; the session
    // authority spells it 'sales'. Neither parser accepts the other's word.
    assert!("sales_employee".parse::<StaffRole>().is_ok());
    assert!("sales".parse::<StaffRole>().is_err());
    assert!("sales".parse::<optiqueue::auth::Role>().is_ok());
    assert!("sales_employee".parse::<optiqueue::auth::Role>().is_err());

    let foh = FrontOfHouse::new();
    foh.auth.login("ace", "sales123");
    // A gate asking in the directory's vocabulary matches no session role.
    assert!(!foh.auth.has_role("sales_employee"));
}

#[test]
fn registry_errors_map_into_the_app_error_model() {
    let foh = FrontOfHouse::new();
    let err = foh
        .book
        .register(NewCustomer::default())
        .expect_err("empty form rejected");
    let app: AppError = err.into();
    assert_eq!(app.message(), "Name and contact number are required");
    assert_eq!(app.notification().variant, Variant::Destructive);

    let err = foh
        .directory
        .create_user(NewStaffUser {
            name: "Nina".into(),
            email: "nina@escaoptical.com".into(),
            password: String::new(),
            role: StaffRole::Cashier,
        })
        .expect_err("missing password rejected");
    let app: AppError = err.into();
    assert_eq!(app.code_str(), "missing_fields");
}
