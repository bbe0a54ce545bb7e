use super::*;

#[test]
fn relative_to_subtracts_container_origin() {
    let pos = GlowPosition::relative_to(420.0, 610.0, 400.0, 560.0);
    assert_eq!(pos, GlowPosition { x: 20.0, y: 50.0 });
}

#[test]
fn relative_to_allows_pointer_left_of_container() {
    let pos = GlowPosition::relative_to(10.0, 10.0, 30.0, 5.0);
    assert_eq!(pos, GlowPosition { x: -20.0, y: 5.0 });
}

#[test]
fn style_centers_disc_on_pointer() {
    let style = GlowPosition { x: 100.0, y: 80.0 }.style();
    assert_eq!(style, "left: 25px; top: 5px; width: 150px; height: 150px;");
}

#[test]
fn default_position_is_container_origin() {
    assert_eq!(GlowPosition::default().style(), "left: -75px; top: -75px; width: 150px; height: 150px;");
}
