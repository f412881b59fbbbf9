/// Joins the present, non-empty class tokens with single spaces, keeping
/// their order.
pub fn build_class_name<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut class_name = String::new();
    for token in parts.into_iter().flatten().map(str::trim) {
        if token.is_empty() {
            continue;
        }
        if !class_name.is_empty() {
            class_name.push(' ');
        }
        class_name.push_str(token);
    }
    class_name
}
