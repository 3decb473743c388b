use super::{build_integration_test, child_backgrounds};
use color_lift::{Color, HostError, ParentEvent};

#[test]
fn given_a_fresh_mount_should_render_white_children_under_generated_parent() {
    let test = build_integration_test()
        .given_generated_colors(&["#3E8A1F"])
        .build();

    assert_eq!(test.host.renderer().count(), 1);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[0].key(), "parent");
        assert_eq!(renders[0].background().as_str(), "#3E8A1F");
        assert_eq!(child_backgrounds(&renders[0]), vec!["#FFF", "#FFF"]);
    });
}

#[test]
fn given_a_click_on_child_a_should_recolor_both_children_and_parent() {
    let mut test = build_integration_test()
        .given_generated_colors(&["#3E8A1F", "#AA11BB", "#5B2C90"])
        .build();

    let processed = test.host.click("child-1").unwrap();

    assert_eq!(processed, 1);
    assert_eq!(test.renders.count(), 2);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[1].background().as_str(), "#5B2C90");
        assert_eq!(child_backgrounds(&renders[1]), vec!["#AA11BB", "#AA11BB"]);
    });
    assert_eq!(test.host.model().children_color, Color::new("#AA11BB"));
    assert_eq!(test.host.model().color, Color::new("#5B2C90"));
}

#[test]
fn given_child_a_then_child_b_clicked_should_follow_the_latest_child() {
    let mut test = build_integration_test()
        .given_generated_colors(&["#3E8A1F", "#AA11BB", "#5B2C90", "#00FF00", "#C0FFEE"])
        .build();

    test.host.click("child-1").unwrap();
    test.host.click("child-2").unwrap();

    assert_eq!(test.renders.count(), 3);
    test.renders.with_renders(|renders| {
        assert_eq!(child_backgrounds(&renders[1]), vec!["#AA11BB", "#AA11BB"]);
        assert_eq!(child_backgrounds(&renders[2]), vec!["#00FF00", "#00FF00"]);
        assert_eq!(renders[2].background().as_str(), "#C0FFEE");
    });
}

#[test]
fn given_an_emitted_change_should_adopt_the_exact_color() {
    let mut test = build_integration_test()
        .given_generated_colors(&["#3E8A1F", "#111111"])
        .build();

    test.host
        .emitter()
        .emit(ParentEvent::ChangeColor(Color::new("#123ABC")));
    assert_eq!(test.host.process_events(), 1);

    assert_eq!(test.host.model().children_color.as_str(), "#123ABC");
    assert_eq!(
        child_backgrounds(test.host.tree()),
        vec!["#123ABC", "#123ABC"]
    );
}

#[test]
fn given_a_repeated_parent_color_should_still_assign_it() {
    let mut test = build_integration_test()
        .given_generated_colors(&["#777777", "#AA11BB", "#777777"])
        .build();

    test.host.click("child-2").unwrap();

    // Same value as before, but the handler ran and re-rendered.
    assert_eq!(test.host.model().color.as_str(), "#777777");
    assert_eq!(test.renders.count(), 2);
}

#[test]
fn given_props_callback_invoked_from_a_recorded_render_should_render_again() {
    let mut test = build_integration_test()
        .given_generated_colors(&["#3E8A1F", "#ABCDEF", "#010203"])
        .build();

    test.renders.with_renders(|renders| {
        assert!(renders[0].children()[1].click());
    });
    // Nothing happens until the host drains its queue.
    assert_eq!(test.renders.count(), 1);

    test.host.process_events();

    assert_eq!(test.renders.count(), 2);
    assert_eq!(
        child_backgrounds(test.host.tree()),
        vec!["#ABCDEF", "#ABCDEF"]
    );
}

#[test]
fn given_an_unknown_key_should_report_element_not_found() {
    let mut test = build_integration_test()
        .given_generated_colors(&["#3E8A1F"])
        .build();

    assert_eq!(
        test.host.click("child-9"),
        Err(HostError::ElementNotFound("child-9".to_string()))
    );
    assert_eq!(test.renders.count(), 1);
}

#[test]
fn given_the_parent_key_should_report_it_is_not_clickable() {
    let mut test = build_integration_test()
        .given_generated_colors(&["#3E8A1F"])
        .build();

    assert_eq!(
        test.host.click("parent"),
        Err(HostError::NotClickable("parent".to_string()))
    );
}

#[test]
fn given_an_unmounted_host_should_return_final_model_and_ignore_late_clicks() {
    let mut test = build_integration_test()
        .given_generated_colors(&["#3E8A1F", "#AA11BB", "#5B2C90", "#00FF00"])
        .build();
    test.host.click("child-1").unwrap();
    let stale = test.host.tree().clone();

    let model = test.host.unmount();

    assert_eq!(model.children_color.as_str(), "#AA11BB");
    // The child still generates, but the event has nowhere to go.
    assert!(stale.find("child-2").unwrap().click());
    assert_eq!(test.renders.count(), 2);
}
