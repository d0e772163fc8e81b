use crate::constants::{
    ADDRESS_MASK, DISPLAY_HEIGHT, DISPLAY_WIDTH, FLAG_REGISTER, GLYPH_SIZE, STACK_SIZE,
};
use crate::error::EngineError;
use crate::instruction::Instruction;
use crate::keypad::{first_pressed, Keypad};
use crate::random::RandomSource;
use crate::state::State;

/// What the caller should do after a step
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The instruction ran; fetch the next one
    Continue,
    /// `FX0A` found no key held down and left the pc where it was.
    /// Stepping again re-runs the same instruction.
    WaitingForKey,
}

/// Applies a decoded instruction to the state.
///
/// Every instruction moves the pc itself. Errors are raised before anything is mutated.
pub fn execute(
    instruction: Instruction,
    state: &mut State,
    keypad: &dyn Keypad,
    rng: &mut dyn RandomSource,
) -> Result<Step, EngineError> {
    use Instruction::*;

    match instruction {
        Clear => clr(state),
        Return => rts(state)?,
        Jump { addr } => state.pc = addr,
        Call { addr } => call(state, addr)?,
        SkipIfEqual { x, nn } => {
            let equal = state.v[x] == nn;
            skip_if(state, equal)
        }
        SkipIfNotEqual { x, nn } => {
            let differ = state.v[x] != nn;
            skip_if(state, differ)
        }
        SkipIfRegistersEqual { x, y } => {
            let equal = state.v[x] == state.v[y];
            skip_if(state, equal)
        }
        Load { x, nn } => alu(state, x, |_| (nn, None)),
        Add { x, nn } => alu(state, x, |vx| (vx.wrapping_add(nn), None)),
        Move { x, y } => {
            let vy = state.v[y];
            alu(state, x, |_| (vy, None))
        }
        Or { x, y } => {
            let vy = state.v[y];
            alu(state, x, |vx| (vx | vy, None))
        }
        And { x, y } => {
            let vy = state.v[y];
            alu(state, x, |vx| (vx & vy, None))
        }
        Xor { x, y } => {
            let vy = state.v[y];
            alu(state, x, |vx| (vx ^ vy, None))
        }
        AddRegisters { x, y } => {
            let vy = state.v[y];
            alu(state, x, |vx| {
                let (res, over) = vx.overflowing_add(vy);
                (res, Some(over as u8))
            })
        }
        Sub { x, y } => {
            let vy = state.v[y];
            alu(state, x, |vx| {
                let (res, under) = vx.overflowing_sub(vy);
                (res, Some(!under as u8))
            })
        }
        ShiftRight { x } => shift(state, x, |vx| (vx >> 1, vx & 0x1)),
        SubReversed { x, y } => {
            let vy = state.v[y];
            alu(state, x, |vx| {
                let (res, under) = vy.overflowing_sub(vx);
                (res, Some(!under as u8))
            })
        }
        ShiftLeft { x } => shift(state, x, |vx| (vx << 1, vx >> 7)),
        SkipIfRegistersNotEqual { x, y } => {
            let differ = state.v[x] != state.v[y];
            skip_if(state, differ)
        }
        LoadAddress { addr } => {
            state.i = addr;
            advance(state);
        }
        Random { x, nn } => {
            let byte = rng.random_byte();
            alu(state, x, |_| (byte & nn, None))
        }
        Draw { x, y, rows } => draw(state, x, y, rows),
        SkipIfPressed { x } => {
            let pressed = keypad.is_pressed(state.v[x]);
            skip_if(state, pressed)
        }
        SkipIfNotPressed { x } => {
            let pressed = keypad.is_pressed(state.v[x]);
            skip_if(state, !pressed)
        }
        LoadDelay { x } => {
            let delay = state.delay_timer;
            alu(state, x, |_| (delay, None))
        }
        WaitForKey { x } => return Ok(keyd(state, x, keypad)),
        SetDelay { x } => {
            state.delay_timer = state.v[x];
            advance(state);
        }
        SetSound { x } => {
            state.sound_timer = state.v[x];
            advance(state);
        }
        AddAddress { x } => addi(state, x),
        LoadGlyph { x } => {
            state.i = u16::from(state.v[x] & 0xF) * GLYPH_SIZE;
            advance(state);
        }
        StoreDigits { x } => bcd(state, x),
        StoreRegisters { x } => stor(state, x),
        LoadRegisters { x } => read(state, x),
    }
    Ok(Step::Continue)
}

fn advance(state: &mut State) {
    state.pc = state.pc.wrapping_add(0x2);
}

/// if condition then pc += 4 else pc += 2
fn skip_if(state: &mut State, condition: bool) {
    let step = if condition { 0x4 } else { 0x2 };
    state.pc = state.pc.wrapping_add(step);
}

/// Vx = f(Vx).0; VF = f(Vx).1 when there is one.
/// The flag is written last so it wins when x is VF.
fn alu(state: &mut State, x: usize, f: impl FnOnce(u8) -> (u8, Option<u8>)) {
    let (res, flag) = f(state.v[x]);
    state.v[x] = res;
    if let Some(flag) = flag {
        state.v[FLAG_REGISTER] = flag;
    }
    advance(state);
}

/// VF = f(Vx).1; Vx = f(Vx).0
/// The shifted value is written last so it wins when x is VF.
fn shift(state: &mut State, x: usize, f: impl FnOnce(u8) -> (u8, u8)) {
    let (res, flag) = f(state.v[x]);
    state.v[FLAG_REGISTER] = flag;
    state.v[x] = res;
    advance(state);
}

/// clear
fn clr(state: &mut State) {
    state.frame_buffer = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    state.draw_flag = true;
    advance(state);
}

/// PC = STACK.pop() + 2
fn rts(state: &mut State) -> Result<(), EngineError> {
    if state.sp == 0 {
        return Err(EngineError::StackUnderflow { pc: state.pc });
    }
    state.sp -= 1;
    state.pc = state.stack[state.sp].wrapping_add(0x2);
    Ok(())
}

/// STACK.push(PC); PC = addr
fn call(state: &mut State, addr: u16) -> Result<(), EngineError> {
    if state.sp == STACK_SIZE {
        return Err(EngineError::StackOverflow { pc: state.pc });
    }
    state.stack[state.sp] = state.pc;
    state.sp += 1;
    state.pc = addr;
    Ok(())
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position x, y on the FrameBuffer with wrapping.
/// Sets VF if any pixels were erased
fn draw(state: &mut State, x: usize, y: usize, rows: u8) {
    let (origin_x, origin_y) = (state.v[x] as usize, state.v[y] as usize);
    let mut collision = false;

    for row in 0..rows {
        let sprite_row = state.read_byte(state.i.wrapping_add(u16::from(row)));
        let py = (origin_y + row as usize) % DISPLAY_HEIGHT;
        for bit in 0..8 {
            if (sprite_row >> (7 - bit)) & 0x1 == 0 {
                continue;
            }
            let px = (origin_x + bit) % DISPLAY_WIDTH;
            let pixel = &mut state.frame_buffer[py][px];
            collision |= *pixel;
            *pixel = !*pixel;
        }
    }

    state.v[FLAG_REGISTER] = collision as u8;
    state.draw_flag = true;
    advance(state);
}

/// await keypress for Vx
fn keyd(state: &mut State, x: usize, keypad: &dyn Keypad) -> Step {
    match first_pressed(keypad) {
        Some(key) => {
            state.v[x] = key;
            advance(state);
            Step::Continue
        }
        None => Step::WaitingForKey,
    }
}

/// I += Vx; VF = I overflowed 12 bits
fn addi(state: &mut State, x: usize) {
    let sum = state.i + u16::from(state.v[x]);
    state.v[FLAG_REGISTER] = (sum > ADDRESS_MASK) as u8;
    state.i = sum & ADDRESS_MASK;
    advance(state);
}

/// mem[I..I+3] = bcd(Vx)
fn bcd(state: &mut State, x: usize) {
    let vx = state.v[x];
    let digits = [vx / 100, vx / 10 % 10, vx % 10];
    for (offset, digit) in digits.iter().enumerate() {
        state.write_byte(state.i.wrapping_add(offset as u16), *digit);
    }
    advance(state);
}

/// mem[I..=I+x] = V0..=Vx; I += x + 1
fn stor(state: &mut State, x: usize) {
    for offset in 0..=x {
        state.write_byte(state.i.wrapping_add(offset as u16), state.v[offset]);
    }
    state.i = (state.i + x as u16 + 1) & ADDRESS_MASK;
    advance(state);
}

/// V0..=Vx = mem[I..=I+x]; I += x + 1
fn read(state: &mut State, x: usize) {
    for offset in 0..=x {
        state.v[offset] = state.read_byte(state.i.wrapping_add(offset as u16));
    }
    state.i = (state.i + x as u16 + 1) & ADDRESS_MASK;
    advance(state);
}
