use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};
use crate::core::library::{FieldValue, LibraryError, LibraryResult};

// Patron abstracts library member and the books the member currently has checked out.
#[derive(Debug, Clone)]
pub struct Patron {
    first_name: String,
    last_name: String,
    age: FieldValue,
    member_id: FieldValue,
    borrowed_books: Vec<String>,
}

impl Patron {
    /// Creates a patron, names must not contain any numeric character.
    pub fn new(first_name: &str, last_name: &str,
               age: impl Into<FieldValue>, member_id: impl Into<FieldValue>) -> LibraryResult<Self> {
        if has_numbers(first_name) || has_numbers(last_name) {
            return Err(LibraryError::invalid_name());
        }
        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age: age.into(),
            member_id: member_id.into(),
            borrowed_books: vec![],
        })
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn age(&self) -> &FieldValue {
        &self.age
    }

    pub fn member_id(&self) -> &FieldValue {
        &self.member_id
    }

    /// Borrowed titles in lower case, in the order they were borrowed.
    pub fn borrowed_books(&self) -> &[String] {
        &self.borrowed_books
    }

    pub fn add_borrowed_book(&mut self, title: &str) {
        let title = normalize_title(title);
        if !self.borrowed_books.contains(&title) {
            self.borrowed_books.push(title);
        }
    }

    pub fn return_borrowed_book(&mut self, title: &str) {
        let title = normalize_title(title);
        self.borrowed_books.retain(|b| *b != title);
    }

    pub fn has_borrowed_book(&self, title: &str) -> bool {
        self.borrowed_books.contains(&normalize_title(title))
    }
}

// Member id and borrowed books are deliberately left out of equality.
impl PartialEq for Patron {
    fn eq(&self, other: &Self) -> bool {
        self.first_name == other.first_name &&
            self.last_name == other.last_name &&
            self.age == other.age
    }
}

impl Eq for Patron {}

pub(crate) fn normalize_title(title: &str) -> String {
    title.to_lowercase()
}

// decimal digits only, roman numerals and fractions are allowed
fn has_numbers(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_digit() || c.general_category() == GeneralCategory::DecimalNumber)
}

#[cfg(test)]
mod tests {
    use crate::core::library::{FieldValue, LibraryError};
    use crate::patrons::domain::model::Patron;

    fn build_patron() -> Patron {
        Patron::new("fname", "lname", "15", "1").expect("should build patron")
    }

    #[tokio::test]
    async fn test_should_build_patron() {
        let patron = build_patron();
        assert_eq!("fname", patron.first_name());
        assert_eq!("lname", patron.last_name());
        assert_eq!(&FieldValue::from("15"), patron.age());
        assert_eq!(&FieldValue::from("1"), patron.member_id());
        assert!(patron.borrowed_books().is_empty());
    }

    #[tokio::test]
    async fn test_should_build_patron_with_numeric_fields() {
        let patron = Patron::new("John", "Doe", 30, 123).expect("should build patron");
        assert_eq!(&FieldValue::Number(30), patron.age());
        assert_eq!(&FieldValue::Number(123), patron.member_id());
    }

    #[tokio::test]
    async fn test_should_reject_first_name_with_digit() {
        let res = Patron::new("f1name", "lname", 15, 1);
        assert!(matches!(res, Err(LibraryError::InvalidName { .. })));
    }

    #[tokio::test]
    async fn test_should_accept_non_digit_numerals() {
        assert!(Patron::new("Henry", "Ⅷ", 50, 1).is_ok());
        assert!(Patron::new("A½", "B", 50, 2).is_ok());
        let res = Patron::new("Ali", "٣", 50, 3);
        assert!(matches!(res, Err(LibraryError::InvalidName { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_last_name_with_digit() {
        let res = Patron::new("fname", "l1name", 15, 1);
        assert!(matches!(res, Err(LibraryError::InvalidName { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_names_with_digit_with_message() {
        let err = Patron::new("f1name", "l2name", 15, 1).expect_err("should reject names");
        assert_eq!("Name should not contain numbers", err.to_string());
        let err = Patron::new("1fname", "1lname", "20", "1234").expect_err("should reject names");
        assert!(matches!(err, LibraryError::InvalidName { .. }));
    }

    #[tokio::test]
    async fn test_should_add_borrowed_book() {
        let mut patron = build_patron();
        patron.add_borrowed_book("Book1");
        assert_eq!("book1", patron.borrowed_books()[0].as_str());
    }

    #[tokio::test]
    async fn test_should_add_borrowed_book_once() {
        let mut patron = build_patron();
        patron.add_borrowed_book("Book");
        patron.add_borrowed_book("Book");
        patron.add_borrowed_book("BOOK");
        assert_eq!(1, patron.borrowed_books().len());
    }

    #[tokio::test]
    async fn test_should_keep_borrow_order() {
        let mut patron = build_patron();
        patron.add_borrowed_book("Dune");
        patron.add_borrowed_book("Emma");
        patron.add_borrowed_book("dune");
        assert_eq!(vec!["dune".to_string(), "emma".to_string()], patron.borrowed_books());
    }

    #[tokio::test]
    async fn test_should_return_borrowed_book() {
        let mut patron = build_patron();
        patron.add_borrowed_book("Book");
        patron.return_borrowed_book("book");
        assert_eq!(0, patron.borrowed_books().len());
    }

    #[tokio::test]
    async fn test_should_ignore_return_of_not_borrowed_book() {
        let mut patron = build_patron();
        patron.add_borrowed_book("Book");
        patron.return_borrowed_book("No Book1");
        assert_eq!(1, patron.borrowed_books().len());
    }

    #[tokio::test]
    async fn test_should_check_borrowed_book_ignoring_case() {
        let mut patron = build_patron();
        patron.add_borrowed_book("TestBook");
        assert!(patron.has_borrowed_book("testbook"));
        assert!(patron.has_borrowed_book("TESTBOOK"));
        assert!(!patron.has_borrowed_book("OtherBook"));
    }

    #[tokio::test]
    async fn test_should_compare_names_and_age_only() {
        let patron = Patron::new("A", "B", 20, 1).expect("should build patron");
        let mut other_member = Patron::new("A", "B", 20, 2).expect("should build patron");
        other_member.add_borrowed_book("Book");
        let older = Patron::new("A", "B", 21, 1).expect("should build patron");
        assert!(patron == other_member);
        assert!(!(patron != other_member));
        assert!(patron != older);
        assert!(!(patron == older));
    }

    #[tokio::test]
    async fn test_should_not_equal_different_names() {
        let patron = build_patron();
        let same = build_patron();
        let different = Patron::new("fnamedifferent", "lnamedifferent", "15", "1").expect("should build patron");
        assert_eq!(patron, same);
        assert_ne!(patron, different);
    }

    #[tokio::test]
    async fn test_should_not_equal_different_age_types() {
        let text_age = Patron::new("A", "B", "20", 1).expect("should build patron");
        let number_age = Patron::new("A", "B", 20, 1).expect("should build patron");
        assert_ne!(text_age, number_age);
    }
}
