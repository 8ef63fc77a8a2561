/// Names reserved by the object model (`__init__`, `__eq__`, ...).
///
/// Special members never take part in a type's structural signature.
pub fn is_special_name(name: &str) -> bool {
    name.starts_with("__") && name.ends_with("__")
}
