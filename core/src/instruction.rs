use crate::opcode::Opcode;

/// A decoded Chip-8 instruction with its operands pulled out of the opcode.
///
/// `x` and `y` index registers, `nn` is an immediate byte, `addr` a 12-bit address.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0
    Clear,
    /// 00EE
    Return,
    /// 1NNN
    Jump { addr: u16 },
    /// 2NNN
    Call { addr: u16 },
    /// 3XNN
    SkipIfEqual { x: usize, nn: u8 },
    /// 4XNN
    SkipIfNotEqual { x: usize, nn: u8 },
    /// 5XY0
    SkipIfRegistersEqual { x: usize, y: usize },
    /// 6XNN
    Load { x: usize, nn: u8 },
    /// 7XNN
    Add { x: usize, nn: u8 },
    /// 8XY0
    Move { x: usize, y: usize },
    /// 8XY1
    Or { x: usize, y: usize },
    /// 8XY2
    And { x: usize, y: usize },
    /// 8XY3
    Xor { x: usize, y: usize },
    /// 8XY4
    AddRegisters { x: usize, y: usize },
    /// 8XY5
    Sub { x: usize, y: usize },
    /// 8XY6
    ShiftRight { x: usize },
    /// 8XY7
    SubReversed { x: usize, y: usize },
    /// 8XYE
    ShiftLeft { x: usize },
    /// 9XY0
    SkipIfRegistersNotEqual { x: usize, y: usize },
    /// ANNN
    LoadAddress { addr: u16 },
    /// CXNN
    Random { x: usize, nn: u8 },
    /// DXYN
    Draw { x: usize, y: usize, rows: u8 },
    /// EX9E
    SkipIfPressed { x: usize },
    /// EXA1
    SkipIfNotPressed { x: usize },
    /// FX07
    LoadDelay { x: usize },
    /// FX0A
    WaitForKey { x: usize },
    /// FX15
    SetDelay { x: usize },
    /// FX18
    SetSound { x: usize },
    /// FX1E
    AddAddress { x: usize },
    /// FX29
    LoadGlyph { x: usize },
    /// FX33
    StoreDigits { x: usize },
    /// FX55
    StoreRegisters { x: usize },
    /// FX65
    LoadRegisters { x: usize },
}

impl Instruction {
    /// Selects the Instruction for a given opcode, or `None` if it isn't one.
    ///
    /// The family picks the row; families 0, E and F then look at the low byte and
    /// family 8 at the low nibble.
    pub fn decode(op: u16) -> Option<Instruction> {
        let (x, y) = (op.x(), op.y());
        let instruction = match op.family() {
            0x0 => match op.nnn() {
                0x0E0 => Instruction::Clear,
                0x0EE => Instruction::Return,
                _ => return None,
            },
            0x1 => Instruction::Jump { addr: op.nnn() },
            0x2 => Instruction::Call { addr: op.nnn() },
            0x3 => Instruction::SkipIfEqual { x, nn: op.nn() },
            0x4 => Instruction::SkipIfNotEqual { x, nn: op.nn() },
            0x5 if op.n() == 0x0 => Instruction::SkipIfRegistersEqual { x, y },
            0x6 => Instruction::Load { x, nn: op.nn() },
            0x7 => Instruction::Add { x, nn: op.nn() },
            0x8 => match op.n() {
                0x0 => Instruction::Move { x, y },
                0x1 => Instruction::Or { x, y },
                0x2 => Instruction::And { x, y },
                0x3 => Instruction::Xor { x, y },
                0x4 => Instruction::AddRegisters { x, y },
                0x5 => Instruction::Sub { x, y },
                0x6 => Instruction::ShiftRight { x },
                0x7 => Instruction::SubReversed { x, y },
                0xE => Instruction::ShiftLeft { x },
                _ => return None,
            },
            0x9 if op.n() == 0x0 => Instruction::SkipIfRegistersNotEqual { x, y },
            0xA => Instruction::LoadAddress { addr: op.nnn() },
            0xC => Instruction::Random { x, nn: op.nn() },
            0xD => Instruction::Draw { x, y, rows: op.n() },
            0xE => match op.nn() {
                0x9E => Instruction::SkipIfPressed { x },
                0xA1 => Instruction::SkipIfNotPressed { x },
                _ => return None,
            },
            0xF => match op.nn() {
                0x07 => Instruction::LoadDelay { x },
                0x0A => Instruction::WaitForKey { x },
                0x15 => Instruction::SetDelay { x },
                0x18 => Instruction::SetSound { x },
                0x1E => Instruction::AddAddress { x },
                0x29 => Instruction::LoadGlyph { x },
                0x33 => Instruction::StoreDigits { x },
                0x55 => Instruction::StoreRegisters { x },
                0x65 => Instruction::LoadRegisters { x },
                _ => return None,
            },
            _ => return None,
        };
        Some(instruction)
    }
}
