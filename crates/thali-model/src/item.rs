use std::borrow::Cow;

/// Read access to the fields of a menu record.
///
/// Stats, search and receipts work over anything that can report these four
/// fields, so both validated [`Thali`](crate::Thali) values and lenient
/// [`MenuEntry`](crate::MenuEntry) views share one implementation.
pub trait MenuItem {
    /// Display name of the combo.
    fn name(&self) -> Cow<'_, str>;

    /// Dish names in display order.
    fn items(&self) -> Vec<Cow<'_, str>>;

    /// Price of the combo. NaN when the record carries no usable price.
    fn price(&self) -> f64;

    /// Whether the combo is vegetarian.
    fn is_veg(&self) -> bool;
}
