use luna::core::commands::statements;
use luna::core::session::SessionTarget;

fn target() -> SessionTarget {
    SessionTarget {
        username: "admin".into(),
        password: "secret".into(),
        database: "jpa".into(),
        host: "localhost".into(),
        port: 5432,
    }
}

#[test]
fn test_create_table() {
    assert_eq!(
        statements::create_table("t", "id INT, name VARCHAR(50)"),
        "CREATE TABLE t (id INT, name VARCHAR(50))"
    );
}

#[test]
fn test_drop_table() {
    assert_eq!(statements::drop_table("t"), "DROP TABLE t");
}

#[test]
fn test_create_schema() {
    assert_eq!(statements::create_schema("s"), "CREATE SCHEMA s");
}

#[test]
fn test_insert_into() {
    assert_eq!(
        statements::insert_into("t", "1,'a'"),
        "INSERT INTO t VALUES (1,'a')"
    );
}

#[test]
fn test_select_from_without_condition() {
    assert_eq!(statements::select_from("users", ""), "SELECT * FROM users");
}

#[test]
fn test_select_from_with_condition() {
    assert_eq!(
        statements::select_from("users", "age > 30"),
        "SELECT * FROM users WHERE age > 30"
    );
}

#[test]
fn test_update_with_and_without_condition() {
    assert_eq!(
        statements::update("users", "city='LA'", "name='John'"),
        "UPDATE users SET city='LA' WHERE name='John'"
    );
    assert_eq!(
        statements::update("users", "city='LA'", ""),
        "UPDATE users SET city='LA'"
    );
}

#[test]
fn test_delete_from() {
    assert_eq!(
        statements::delete_from("users", "age > 30"),
        "DELETE FROM users WHERE age > 30"
    );
    assert_eq!(statements::delete_from("users", ""), "DELETE FROM users");
}

#[test]
fn test_call_procedure_and_function() {
    assert_eq!(statements::call_procedure("p()"), "CALL p()");
    assert_eq!(statements::call_function("f()"), "SELECT f()");
}

#[test]
fn test_split_condition_at_where_keyword() {
    let (set_clause, condition) = statements::split_condition("city='LA' where name='John'");
    assert_eq!(set_clause, "city='LA'");
    assert_eq!(condition, "name='John'");
}

#[test]
fn test_split_condition_without_where() {
    let (set_clause, condition) = statements::split_condition("city='LA', age=3");
    assert_eq!(set_clause, "city='LA', age=3");
    assert!(condition.is_empty());
}

#[test]
fn test_backup_args_use_session_credentials() {
    let args = statements::backup_args(&target(), "/tmp/backup.sql");
    assert_eq!(
        args,
        vec!["-h", "localhost", "-p", "5432", "-U", "admin", "-d", "jpa", "-f", "/tmp/backup.sql"]
    );
}
