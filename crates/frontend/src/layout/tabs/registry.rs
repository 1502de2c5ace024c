/// Display label for a tab key. Single source for the sidebar, the tab
/// strip and the `?active=` URL restore path.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "u501_create_bookings" => "Create bookings",
        "a003_my_bookings" => "My bookings",
        "a003_admin_review" => "Approvals",
        "a004_booking_groups" => "Booking groups",
        "a002_customers" => "Customers",
        _ => "Unknown",
    }
}
