use tsiolkovsky::{Error, Operand, Quantities, Unknown};

/// Builds quantities with the operands selected by `mask` left absent.
fn quantities_with_absent(mask: u8) -> Quantities {
    let pick = |bit: u8, value: f64| {
        if mask & (1 << bit) == 0 {
            Operand::from(value)
        } else {
            Operand::Absent
        }
    };

    Quantities {
        delta_v: pick(0, 5.0),
        isp: pick(1, 300.0),
        initial_mass: pick(2, 1000.0),
        final_mass: pick(3, 150.0),
    }
}

#[test]
fn every_combination_other_than_one_absent_fails() {
    for mask in 0u8..16 {
        let absent = mask.count_ones() as usize;
        let result = quantities_with_absent(mask).solve();

        if absent == 1 {
            assert!(result.is_ok(), "mask {mask:04b} should solve");
        } else {
            assert_eq!(
                result,
                Err(Error::Argument { absent }),
                "mask {mask:04b} should be rejected"
            );
        }
    }
}

#[test]
fn single_absent_operand_selects_the_unknown() {
    let expected = [
        (0b0001, Unknown::DeltaV),
        (0b0010, Unknown::SpecificImpulse),
        (0b0100, Unknown::InitialMass),
        (0b1000, Unknown::FinalMass),
    ];

    for (mask, unknown) in expected {
        let solution = quantities_with_absent(mask).solve().unwrap();
        assert_eq!(solution.unknown, unknown);
    }
}

#[test]
fn argument_error_precedes_shape_checks() {
    // Incompatible shapes, but two operands absent.
    let quantities = Quantities::new(
        Operand::Absent,
        Operand::Absent,
        vec![1000.0, 900.0],
        vec![150.0, 140.0, 130.0],
    );

    assert_eq!(quantities.solve(), Err(Error::Argument { absent: 2 }));
}
