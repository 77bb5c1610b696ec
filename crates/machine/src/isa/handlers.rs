//! Instruction handlers.
//!
//! Every handler receives the machine state and the decoded operand. Memory
//! instructions treat the operand as an address; `OUT`, `INP` and `HLT`
//! ignore it; `WRT` uses it as a device index. Branches go through
//! [`Cpu::jump`], which suppresses the post-instruction increment.

use crate::common::error::Fault;
use crate::common::word::Word;
use crate::core::cpu::Cpu;

/// `HLT`: stop the machine.
pub fn hlt(cpu: &mut Cpu, _operand: Word) -> Result<(), Fault> {
    cpu.halted = true;
    Ok(())
}

/// `ADD`: `acc += memory[operand]`.
pub fn add(cpu: &mut Cpu, operand: Word) -> Result<(), Fault> {
    cpu.acc = cpu.acc.wrapping_add(cpu.read(operand)?);
    Ok(())
}

/// `SUB`: `acc -= memory[operand]`.
pub fn sub(cpu: &mut Cpu, operand: Word) -> Result<(), Fault> {
    cpu.acc = cpu.acc.wrapping_sub(cpu.read(operand)?);
    Ok(())
}

/// `STA`: `memory[operand] = acc`.
pub fn sta(cpu: &mut Cpu, operand: Word) -> Result<(), Fault> {
    cpu.write(operand, cpu.acc)
}

/// `DAT`: nothing. Data cells are not meant to be executed.
pub fn dat(_cpu: &mut Cpu, _operand: Word) -> Result<(), Fault> {
    Ok(())
}

/// `LDA`: `acc = memory[operand]`.
pub fn lda(cpu: &mut Cpu, operand: Word) -> Result<(), Fault> {
    cpu.acc = cpu.read(operand)?;
    Ok(())
}

/// `BRA`: jump to `operand`.
pub fn bra(cpu: &mut Cpu, operand: Word) -> Result<(), Fault> {
    cpu.jump(operand);
    Ok(())
}

/// `BRZ`: jump to `operand` if `acc == 0`.
pub fn brz(cpu: &mut Cpu, operand: Word) -> Result<(), Fault> {
    if cpu.acc == 0 {
        cpu.jump(operand);
    }
    Ok(())
}

/// `BRP`: jump to `operand` if `acc >= 0`.
pub fn brp(cpu: &mut Cpu, operand: Word) -> Result<(), Fault> {
    if cpu.acc >= 0 {
        cpu.jump(operand);
    }
    Ok(())
}

/// `OUT`: emit the character whose code point is `acc`.
pub fn out(cpu: &mut Cpu, _operand: Word) -> Result<(), Fault> {
    let ch = u32::try_from(cpu.acc)
        .ok()
        .and_then(char::from_u32)
        .ok_or(Fault::InvalidCharacter(cpu.acc))?;
    cpu.emit(ch)
}

/// `INP`: read an integer into `acc`, re-prompting on unparseable lines.
pub fn inp(cpu: &mut Cpu, _operand: Word) -> Result<(), Fault> {
    cpu.acc = cpu.read_input()?;
    Ok(())
}

/// `WRT`: deliver `acc` to the device at index `operand`.
pub fn wrt(cpu: &mut Cpu, operand: Word) -> Result<(), Fault> {
    let value = cpu.acc;
    cpu.devices.write(operand, value)
}
