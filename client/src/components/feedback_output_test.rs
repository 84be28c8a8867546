use super::*;

#[test]
fn row_class_alternates() {
    assert_eq!(row_class(0), "feedback-table__row");
    assert_eq!(row_class(1), "feedback-table__row feedback-table__row--alt");
    assert_eq!(row_class(2), "feedback-table__row");
}
