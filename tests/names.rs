use stickup_names::{derive_name, InputId, Joystick, NameCache};

#[test]
fn unknown_never_resolves() {
    let names = NameCache::new();
    for joy in [Joystick::All, Joystick::None, Joystick::Joy(1), Joystick::Joy(16)] {
        assert_eq!(names.resolve(InputId::Unknown, joy), None);
    }
    assert!(names.is_empty());
}

#[test]
fn resolving_does_not_disturb_other_keys() {
    let names = NameCache::new();
    let a = names.resolve(InputId::Axis9, Joystick::Joy(3));
    let b = names.resolve(InputId::MouseButton2, Joystick::All);

    for &id in InputId::ALL {
        names.resolve(id, Joystick::Joy(7));
    }

    assert_eq!(names.resolve(InputId::Axis9, Joystick::Joy(3)), a);
    assert_eq!(names.resolve(InputId::MouseButton2, Joystick::All), b);
    assert_eq!(a.as_deref(), Some("Joy3-Axis09"));
    assert_eq!(b.as_deref(), Some("MouseButton2"));
}

#[test]
fn full_name_table_for_device_one() {
    let names: Vec<String> = InputId::ALL
        .iter()
        .filter_map(|&id| derive_name(id, Joystick::Joy(1)))
        .collect();

    assert_eq!(names.len(), 58);
    assert_eq!(names[0], "Joy1-Axis01");
    assert_eq!(names[27], "Joy1-Axis28");
    assert_eq!(names[28], "MouseAxis1");
    assert_eq!(names[30], "MouseAxis3");
    assert_eq!(names[31], "Joy1-Button00");
    assert_eq!(names[50], "Joy1-Button19");
    assert_eq!(names[51], "MouseButton0");
    assert_eq!(names[57], "MouseButton6");
}
