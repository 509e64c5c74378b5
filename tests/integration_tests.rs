//! End-to-end tests for Cellar
//!
//! Drives the full student-table scenario through the facade: table
//! creation, multi-row multi-family loads, qualified and family-wide
//! scans, row deletion, and single-cell overwrites.

use cellar::{Config, MemoryStore, TableFacade};

// =============================================================================
// Helper Functions
// =============================================================================

fn student_facade() -> TableFacade<MemoryStore> {
    let facade = TableFacade::<MemoryStore>::connect(&Config::default()).unwrap();
    facade.create_table("Student", &["info", "score"]).unwrap();
    facade
}

fn load_students(facade: &TableFacade<MemoryStore>) {
    facade
        .add_record(
            "Student",
            "Zhangsan",
            &["info:id", "info:sex", "info:age"],
            &["2015001", "male", "23"],
        )
        .unwrap();
    facade
        .add_record(
            "Student",
            "Marry",
            &["info:id", "info:sex", "info:age"],
            &["2015002", "female", "22"],
        )
        .unwrap();
    facade
        .add_record(
            "Student",
            "Lisi",
            &["info:id", "info:sex", "info:age"],
            &["2015003", "male", "24"],
        )
        .unwrap();

    facade
        .add_record(
            "Student",
            "Zhangsan",
            &["score:Math", "score:English"],
            &["86", "69"],
        )
        .unwrap();
    facade
        .add_record(
            "Student",
            "Marry",
            &["score:ComputerScience", "score:English"],
            &["77", "99"],
        )
        .unwrap();
    facade
        .add_record(
            "Student",
            "Lisi",
            &["score:Math", "score:ComputerScience"],
            &["98", "95"],
        )
        .unwrap();
}

fn some(values: &[&str]) -> Vec<Option<String>> {
    values.iter().map(|v| Some((*v).to_string())).collect()
}

// =============================================================================
// Single-Row Lifecycle
// =============================================================================

#[test]
fn test_single_student_lifecycle() {
    let facade = student_facade();

    facade
        .add_record("Student", "Zhangsan", &["info:id"], &["2015001"])
        .unwrap();

    assert_eq!(
        facade.scan_column("Student", "info:id").unwrap(),
        Some(some(&["2015001"]))
    );

    facade.delete_row("Student", "Zhangsan").unwrap();

    // Absent signal, not an empty sequence
    assert_eq!(facade.scan_column("Student", "info:id").unwrap(), None);
}

// =============================================================================
// Full Scenario
// =============================================================================

#[test]
fn test_qualified_scan_across_students() {
    let facade = student_facade();
    load_students(&facade);

    // Rows scan lexicographically: Lisi, Marry, Zhangsan.
    // Marry has no Math score, so her slot is the absent marker.
    assert_eq!(
        facade.scan_column("Student", "score:Math").unwrap(),
        Some(vec![
            Some("98".to_string()),
            None,
            Some("86".to_string()),
        ])
    );
}

#[test]
fn test_family_scan_across_students() {
    let facade = student_facade();
    load_students(&facade);

    // Row-major, qualifier-sorted within each row:
    //   Lisi:     ComputerScience=95, Math=98
    //   Marry:    ComputerScience=77, English=99
    //   Zhangsan: English=69,         Math=86
    assert_eq!(
        facade.scan_column("Student", "score").unwrap(),
        Some(some(&["95", "98", "77", "99", "69", "86"]))
    );
}

#[test]
fn test_delete_and_modify_reflected_in_scans() {
    let facade = student_facade();
    load_students(&facade);

    facade.delete_row("Student", "Zhangsan").unwrap();
    facade.modify_data("Student", "Lisi", "score:Math", "100").unwrap();

    // Zhangsan's scores are gone; Lisi's Math is overwritten
    assert_eq!(
        facade.scan_column("Student", "score").unwrap(),
        Some(some(&["95", "100", "77", "99"]))
    );

    assert_eq!(
        facade.scan_column("Student", "info:id").unwrap(),
        Some(some(&["2015003", "2015002"]))
    );
}

#[test]
fn test_recreate_table_wipes_scenario() {
    let facade = student_facade();
    load_students(&facade);

    facade.create_table("Student", &["info", "score"]).unwrap();

    assert_eq!(facade.scan_column("Student", "info:id").unwrap(), None);
    assert_eq!(facade.scan_column("Student", "score").unwrap(), None);
}

#[test]
fn test_close_after_scenario() {
    let facade = student_facade();
    load_students(&facade);

    facade.close().unwrap();
}
