//! Fetch-decode-execute loop and the opcode handlers.

use std::io::{ErrorKind, Read, Write};

use crate::error::Fault;
use crate::machine::Um;
use um_common::{Instruction, Opcode};

impl<R: Read, W: Write> Um<R, W> {
    /// Run until HALT, a fault, or the program counter runs off the end of
    /// segment 0 (which is normal termination). Output is flushed before
    /// returning.
    pub fn execute(&mut self) -> Result<(), Fault> {
        loop {
            let at = self.pc;
            let segment_zero = self.memory.segment_zero();
            if at as usize >= segment_zero.len() {
                break;
            }
            let word = segment_zero[at as usize];
            // Incremented before dispatch so LOADP's write wins.
            self.pc = at + 1;

            match Instruction::decode(word).map_err(|source| Fault::Decode { at, source })? {
                Instruction::LoadValue { a, value } => self.registers.set(a, value),
                Instruction::Standard { opcode, a, b, c } => match opcode {
                    Opcode::Cmov => self.exec_cmov(a, b, c),
                    Opcode::Sload => self.exec_sload(at, a, b, c)?,
                    Opcode::Sstore => self.exec_sstore(at, a, b, c)?,
                    Opcode::Add => self.exec_add(a, b, c),
                    Opcode::Mul => self.exec_mul(a, b, c),
                    Opcode::Div => self.exec_div(at, a, b, c)?,
                    Opcode::Nand => self.exec_nand(a, b, c),
                    Opcode::Halt => break,
                    Opcode::Map => self.exec_map(b, c),
                    Opcode::Unmap => self.exec_unmap(at, c)?,
                    Opcode::Out => self.exec_out(at, c)?,
                    Opcode::In => self.exec_in(at, c)?,
                    Opcode::LoadProgram => self.exec_load_program(at, b, c)?,
                    Opcode::LoadValue => unreachable!("decodes to Instruction::LoadValue"),
                },
            }
        }

        self.output.flush().map_err(|e| Fault::Io {
            at: self.pc,
            message: e.to_string(),
        })
    }

    fn exec_cmov(&mut self, a: u32, b: u32, c: u32) {
        if self.registers.get(c) != 0 {
            self.registers.set(a, self.registers.get(b));
        }
    }

    fn exec_sload(&mut self, at: u32, a: u32, b: u32, c: u32) -> Result<(), Fault> {
        let value = self
            .memory
            .get(self.registers.get(b), self.registers.get(c))
            .map_err(|source| Fault::Memory { at, source })?;
        self.registers.set(a, value);
        Ok(())
    }

    fn exec_sstore(&mut self, at: u32, a: u32, b: u32, c: u32) -> Result<(), Fault> {
        self.memory
            .put(
                self.registers.get(a),
                self.registers.get(b),
                self.registers.get(c),
            )
            .map_err(|source| Fault::Memory { at, source })
    }

    fn exec_add(&mut self, a: u32, b: u32, c: u32) {
        let sum = self.registers.get(b).wrapping_add(self.registers.get(c));
        self.registers.set(a, sum);
    }

    fn exec_mul(&mut self, a: u32, b: u32, c: u32) {
        let product = self.registers.get(b).wrapping_mul(self.registers.get(c));
        self.registers.set(a, product);
    }

    fn exec_div(&mut self, at: u32, a: u32, b: u32, c: u32) -> Result<(), Fault> {
        let divisor = self.registers.get(c);
        if divisor == 0 {
            return Err(Fault::DivisionByZero { at });
        }
        self.registers.set(a, self.registers.get(b) / divisor);
        Ok(())
    }

    fn exec_nand(&mut self, a: u32, b: u32, c: u32) {
        self.registers
            .set(a, !(self.registers.get(b) & self.registers.get(c)));
    }

    fn exec_map(&mut self, b: u32, c: u32) {
        let id = self.memory.map(self.registers.get(c));
        self.registers.set(b, id);
    }

    fn exec_unmap(&mut self, at: u32, c: u32) -> Result<(), Fault> {
        self.memory
            .unmap(self.registers.get(c))
            .map_err(|source| Fault::Memory { at, source })
    }

    fn exec_out(&mut self, at: u32, c: u32) -> Result<(), Fault> {
        let value = self.registers.get(c);
        if value > 255 {
            return Err(Fault::OutputOutOfRange { at, value });
        }
        self.output.write_all(&[value as u8]).map_err(|e| Fault::Io {
            at,
            message: e.to_string(),
        })
    }

    fn exec_in(&mut self, at: u32, c: u32) -> Result<(), Fault> {
        let mut byte = [0u8; 1];
        let value = loop {
            match self.input.read(&mut byte) {
                Ok(0) => break u32::MAX,
                Ok(_) => break u32::from(byte[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(Fault::Io {
                        at,
                        message: e.to_string(),
                    })
                }
            }
        };
        self.registers.set(c, value);
        Ok(())
    }

    fn exec_load_program(&mut self, at: u32, b: u32, c: u32) -> Result<(), Fault> {
        let id = self.registers.get(b);
        // Segment 0 is already the program; only copy when jumping into
        // another segment.
        if id != 0 {
            self.memory
                .replace_segment_zero(id)
                .map_err(|source| Fault::Memory { at, source })?;
        }
        self.pc = self.registers.get(c);
        Ok(())
    }
}
