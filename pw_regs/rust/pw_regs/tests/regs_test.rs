// Copyright 2025 The Pigweed Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License. You may obtain a copy of
// the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations under
// the License.

use pw_regs::{
    Error, Field, RoReg, RwReg, SimBus, WoReg, clear_field, ops, read_field, read_register,
    set_field, write_field, write_register,
};

const BASE: usize = 0x4000_0000;

const CTRL: RwReg = unsafe { RwReg::new(BASE) };
const STATUS: RoReg = unsafe { RoReg::new(BASE + 0x4) };
const CLEAR: WoReg = unsafe { WoReg::new(BASE + 0x8) };

const MODE: Field = Field::new(0x0000_0300, 8);
const ENABLE: Field = Field::bit(0);
const PRESCALER: Field = Field::bits(28, 30);
const ID: Field = Field::new(0x00ff_0000, 16);

fn bus() -> SimBus<4> {
    SimBus::new(BASE)
}

#[test]
fn mask_calculated_correctly() {
    assert_eq!(ops::mask(8, 15), 0x0000_ff00);
    assert_eq!(ops::mask(0, 31), 0xffff_ffff);
}

#[test]
fn extract_right_aligns_masked_bits() {
    assert_eq!(ops::extract(0x5555_aa55, 0x0000_ff00, 8), 0xaa);
    assert_eq!(ops::extract(0x0001_0000, 0x0001_0000, 16), 0b1);
    assert_eq!(ops::extract(0xffff_ffff, 0xffff_ffff, 0), 0xffff_ffff);
}

#[test]
fn insert_preserves_unmasked_bits() {
    assert_eq!(ops::insert(0x5555_5555, 0x0000_ff00, 8, 0xaa), 0x5555_aa55);
    assert_eq!(ops::insert(0xffff_ffff, 0x0001_0000, 16, 0b0), 0xfffe_ffff);
    assert_eq!(ops::insert(0, 0x0000_0300, 8, 0b111), 0x0000_0300);
}

#[test]
fn fields_agree_with_raw_ops() {
    for field in [MODE, ENABLE, PRESCALER, ID] {
        for register_value in [0, 0xffff_ffff, 0x5a5a_a5a5] {
            assert_eq!(
                field.extract(register_value),
                ops::extract(register_value, field.mask(), field.position()),
            );
            assert_eq!(
                field.insert(register_value, 0x1ff),
                ops::insert(register_value, field.mask(), field.position(), 0x1ff),
            );
        }
    }
}

#[test]
fn write_field_changes_only_the_field() {
    let bus = SimBus::<4>::filled(BASE, 0xffff_ffff);
    CTRL.on(&bus).write_field(MODE, 0b01);
    assert_eq!(bus.peek(BASE), 0xffff_fdff);
}

#[test]
fn read_field_right_aligns() {
    let bus = bus();
    bus.poke(BASE + 0x4, 0x0001_0203);
    assert_eq!(STATUS.on(&bus).read_field(ID), 0x01);
}

#[test]
fn field_round_trips_for_every_value() {
    let bus = bus();
    let reg = CTRL.on(&bus);
    for initial in [0, 0xffff_ffff, 0xa5a5_a5a5, 0x5a5a_5a5a] {
        for value in 0..=PRESCALER.max_value() {
            bus.poke(BASE, initial);
            reg.write_field(PRESCALER, value);
            assert_eq!(reg.read_field(PRESCALER), value);
            assert_eq!(bus.peek(BASE) & !PRESCALER.mask(), initial & !PRESCALER.mask());
        }
    }
}

#[test]
fn write_field_is_idempotent() {
    let bus = SimBus::<4>::filled(BASE, 0x1234_5678);
    let reg = CTRL.on(&bus);
    reg.write_field(MODE, 0b10);
    let once = bus.peek(BASE);
    reg.write_field(MODE, 0b10);
    assert_eq!(bus.peek(BASE), once);
}

#[test]
fn write_field_truncates_wide_values() {
    let bus = bus();
    let reg = CTRL.on(&bus);
    reg.write_field(MODE, 0b111);
    assert_eq!(bus.peek(BASE), 0x0000_0300);
    reg.write_field(MODE, 0b100);
    assert_eq!(bus.peek(BASE), 0);
}

#[test]
fn try_write_field_rejects_wide_values_without_access() {
    let bus = SimBus::<4>::filled(BASE, 0xdead_beef);
    let reg = CTRL.on(&bus);
    assert_eq!(reg.try_write_field(MODE, 4), Err(Error::OutOfRange));
    assert_eq!(bus.peek(BASE), 0xdead_beef);
    assert_eq!((bus.reads(), bus.writes()), (0, 0));

    assert_eq!(reg.try_write_field(MODE, 3), Ok(()));
    assert_eq!(bus.peek(BASE), 0xdead_bfef);
}

#[test]
fn read_modify_write_is_one_load_and_one_store() {
    let bus = bus();
    let reg = CTRL.on(&bus);

    reg.write_field(MODE, 1);
    assert_eq!((bus.reads(), bus.writes()), (1, 1));

    bus.reset_counters();
    reg.set_field(ENABLE);
    assert_eq!((bus.reads(), bus.writes()), (1, 1));

    bus.reset_counters();
    reg.clear_field(ENABLE);
    assert_eq!((bus.reads(), bus.writes()), (1, 1));

    bus.reset_counters();
    reg.modify_fields(&[(MODE, 2), (ENABLE, 1), (PRESCALER, 5)]);
    assert_eq!((bus.reads(), bus.writes()), (1, 1));
}

#[test]
fn plain_accesses_touch_the_bus_once() {
    let bus = bus();
    CTRL.on(&bus).write(0x1234_5678);
    assert_eq!((bus.reads(), bus.writes()), (0, 1));
    assert_eq!(STATUS.on(&bus).read(), 0);
    assert_eq!((bus.reads(), bus.writes()), (1, 1));
}

#[test]
fn store_field_does_not_read() {
    let bus = SimBus::<4>::filled(BASE, 0xffff_ffff);
    CLEAR.on(&bus).store_field(Field::bit(5), 1);
    assert_eq!(bus.peek(BASE + 0x8), 0x0000_0020);
    assert_eq!((bus.reads(), bus.writes()), (0, 1));
}

#[test]
fn set_and_clear_cover_the_whole_field() {
    let bus = bus();
    let reg = CTRL.on(&bus);
    reg.set_field(MODE);
    assert_eq!(bus.peek(BASE), 0x0000_0300);
    assert_eq!(reg.read_field(MODE), MODE.max_value());
    assert!(reg.is_set(MODE));

    bus.poke(BASE, 0xffff_ffff);
    reg.clear_field(MODE);
    assert_eq!(bus.peek(BASE), 0xffff_fcff);
    assert!(!reg.is_set(MODE));
}

#[test]
fn modify_fields_applies_in_order() {
    let bus = SimBus::<4>::filled(BASE, 0x8000_0000);
    let reg = CTRL.on(&bus);
    reg.modify_fields(&[(MODE, 3), (ENABLE, 1), (MODE, 1)]);
    assert_eq!(bus.peek(BASE), 0x8000_0101);
}

#[test]
fn modify_passes_the_current_value() {
    let bus = SimBus::<4>::filled(BASE, 0x0000_00f0);
    CTRL.on(&bus).modify(|value| value.rotate_left(4));
    assert_eq!(bus.peek(BASE), 0x0000_0f00);
}

#[test]
fn hardware_changes_between_accesses_are_observed() {
    let bus = bus();
    let status = STATUS.on(&bus);
    assert_eq!(status.read_field(ENABLE), 0);
    bus.poke(BASE + 0x4, 1);
    assert_eq!(status.read_field(ENABLE), 1);
}

#[test]
fn handles_are_plain_addresses() {
    assert_eq!(CTRL.addr(), BASE);
    assert_eq!(CLEAR.addr(), BASE + 0x8);
    assert_eq!(format!("{CTRL:?}"), "RwReg(0x40000000)");
    assert_eq!(format!("{STATUS:?}"), "RoReg(0x40000004)");
    assert_eq!(CTRL.on(&bus()).reg(), CTRL);
}

#[test]
fn free_functions_access_memory() {
    // Host memory stands in for a peripheral: `Mmio` only needs an aligned,
    // valid address.
    let mut word: u32 = 0xffff_ffff;
    let addr = &raw mut word as usize;
    let reg = unsafe { RwReg::new(addr) };

    write_field(reg, MODE, 0b01);
    assert_eq!(read_register(reg), 0xffff_fdff);
    assert_eq!(read_field(reg, MODE), 0b01);

    clear_field(reg, ENABLE);
    assert_eq!(read_register(reg), 0xffff_fdfe);
    set_field(reg, ENABLE);
    assert_eq!(read_register(reg), 0xffff_fdff);

    write_register(reg, 0x0001_0203);
    assert_eq!(read_field(unsafe { RoReg::new(addr) }, ID), 0x01);

    pw_regs::barrier();
    assert_eq!(word, 0x0001_0203);
}

// Run with `cargo test -p pw_regs --features log-access,log-truncation`.
#[cfg(any(feature = "log-access", feature = "log-truncation"))]
mod logging {
    use pw_regs::config::{RegsConfig, RegsConfigInterface};

    use super::*;

    #[cfg(feature = "log-truncation")]
    #[test]
    fn logged_truncation_still_masks_the_value() {
        assert!(RegsConfig::LOG_FIELD_TRUNCATION);
        let bus = SimBus::<4>::filled(BASE, 0xffff_ffff);
        let reg = CTRL.on(&bus);
        reg.write_field(MODE, 0b101);
        assert_eq!(bus.peek(BASE), 0xffff_fdff);
        reg.write_field(PRESCALER, 0x1f);
        assert_eq!(bus.peek(BASE), 0xffff_fdff);
        assert_eq!((bus.reads(), bus.writes()), (2, 2));
    }

    #[cfg(feature = "log-access")]
    #[test]
    fn logged_accesses_touch_the_bus_once() {
        assert!(RegsConfig::LOG_REGISTER_ACCESS);
        let bus = bus();
        CTRL.on(&bus).write(0x1234_5678);
        assert_eq!(CTRL.on(&bus).read(), 0x1234_5678);
        CTRL.on(&bus).write_field(ENABLE, 0);
        assert_eq!(bus.peek(BASE), 0x1234_5678);
        assert_eq!((bus.reads(), bus.writes()), (2, 2));
    }
}
