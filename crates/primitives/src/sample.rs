use crate::record::Item;

/// Returns the five-item demonstration inventory, in its original order.
pub fn inventory() -> Vec<Item> {
	vec![
		Item::new("Monitor", "Periferal", 10, 1_500_000),
		Item::new("Keyboard", "Periferal", 25, 250_000),
		Item::new("Mouse", "Periferal", 40, 150_000),
		Item::new("Laptop", "Komputer", 5, 9_000_000),
		Item::new("Headset", "Audio", 15, 350_000),
	]
}
