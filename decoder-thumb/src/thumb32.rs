//! Wide (32-bit) encoding dispatch.
//!
//! Three fixed tiers mirror the architecture's op1/op2/op fields; each
//! second-tier function below transcribes one opcode table of the manual.
//! The second tier compares the 7-bit field against masked patterns rather
//! than indexing a flat table because several rows occupy ranges of the
//! field. Field locals keep the manual's register-field spelling.
#![allow(non_snake_case)]

use crate::Encoding;

/// Classify one 32-bit pattern. `prefix_only` signals that the caller could
/// form only the leading half-word, which is not enough to decode.
pub fn decode_wide(word: u32, prefix_only: bool) -> Encoding {
    if prefix_only {
        return Encoding::INVALID;
    }

    let op1 = (word >> 27) & 0b11;
    let op2 = (word >> 20) & 0b1111111;
    let op = (word >> 15) & 0b1;

    match op1 {
        0b01 => {
            if (op2 & 0b1100100) == 0b0000000 {
                return load_store_multiple(word);
            }
            if (op2 & 0b1100100) == 0b0000100 {
                return load_store_dual_exclusive(word);
            }
            if (op2 & 0b1100000) == 0b0100000 {
                return data_proc_shifted_reg(word);
            }
            if (op2 & 0b1000000) == 0b1000000 {
                return coprocessor(word);
            }
            Encoding::UNDEFINED
        }
        0b10 => {
            if op != 0 {
                return branches_misc_control(word);
            }
            if (op2 >> 5) & 0b1 == 0 {
                data_proc_modified_imm(word)
            } else {
                data_proc_plain_imm(word)
            }
        }
        0b11 => {
            if op2 & 0b1000000 != 0 {
                return coprocessor(word);
            }
            if (op2 >> 5) & 0b1 != 0 {
                return if (op2 >> 4) & 0b1 != 0 {
                    if (op2 >> 3) & 0b1 == 1 {
                        long_multiply_div(word)
                    } else {
                        multiply_diff(word)
                    }
                } else {
                    data_proc_register(word)
                };
            }
            if (op2 & 0b1110001) == 0 {
                return store_single(word);
            }
            match op2 & 0b111 {
                0b001 => load_byte_preload(word),
                0b011 => load_halfword(word),
                0b101 => load_word(word),
                _ => Encoding::UNDEFINED,
            }
        }
        // the remaining op1 value belongs to the narrow encodings and never
        // reaches this decoder through the stream layer
        _ => Encoding::UNDEFINED,
    }
}

/// Load/store multiple. A writeback to SP is the architected PUSH/POP form.
fn load_store_multiple(word: u32) -> Encoding {
    let op = (word >> 23) & 0b11;
    let L = (word >> 20) & 0b1;
    let W = (word >> 21) & 0b1;
    let Rn = (word >> 16) & 0b1111;
    let wback_sp = W == 0b1 && Rn == 0b1101;

    match op {
        0b01 => {
            if L == 0 {
                Encoding::STM_T2
            } else if wback_sp {
                Encoding::POP_T2
            } else {
                Encoding::LDM_T2
            }
        }
        0b10 => {
            if L != 0 {
                Encoding::LDMDB_T1
            } else if wback_sp {
                Encoding::PUSH_T2
            } else {
                Encoding::STMDB_T1
            }
        }
        _ => Encoding::UNDEFINED,
    }
}

/// Doubleword loads split on the base register: a PC base is the
/// literal-addressed form.
fn ldrd_imm_or_lit(word: u32) -> Encoding {
    let Rn = (word >> 16) & 0b1111;
    if Rn == 0b1111 {
        Encoding::LDRD_LIT_T1
    } else {
        Encoding::LDRD_IMM_T1
    }
}

/// Load/store dual, load/store exclusive, table branch.
fn load_store_dual_exclusive(word: u32) -> Encoding {
    let op1 = (word >> 23) & 0b11;
    let op2 = (word >> 20) & 0b11;
    let op3 = (word >> 4) & 0b1111;

    match op1 {
        0b00 => match op2 {
            0b00 => Encoding::STREX_T1,
            0b01 => Encoding::LDREX_T1,
            0b10 => Encoding::STRD_IMM_T1,
            _ => ldrd_imm_or_lit(word),
        },
        0b01 => match op2 {
            0b00 => match op3 {
                0b0100 => Encoding::STREXB_T1,
                0b0101 => Encoding::STREXH_T1,
                _ => Encoding::UNDEFINED,
            },
            0b01 => match op3 {
                0b0000 => Encoding::TBB_T1,
                0b0001 => Encoding::TBH_T1,
                0b0100 => Encoding::LDREXB_T1,
                0b0101 => Encoding::LDREXH_T1,
                _ => Encoding::UNDEFINED,
            },
            0b10 => Encoding::STRD_IMM_T1,
            _ => ldrd_imm_or_lit(word),
        },
        _ => {
            if op2 & 0b1 == 0 {
                Encoding::STRD_IMM_T1
            } else {
                ldrd_imm_or_lit(word)
            }
        }
    }
}

/// Move and immediate shift. A zero shift amount degenerates LSL into MOV
/// and ROR into RRX.
fn move_and_imm_shift(word: u32) -> Encoding {
    let ty = (word >> 4) & 0b11;
    let imm2 = (word >> 6) & 0b11;
    let imm3 = (word >> 12) & 0b111;
    let imm_is_zero = (imm3 << 2) | imm2 == 0;

    match ty {
        0b00 => {
            if imm_is_zero {
                Encoding::MOV_REG_T3
            } else {
                Encoding::LSL_IMM_T2
            }
        }
        0b01 => Encoding::LSR_IMM_T2,
        0b10 => Encoding::ASR_IMM_T2,
        _ => {
            if imm_is_zero {
                Encoding::RRX_T1
            } else {
                Encoding::ROR_IMM_T1
            }
        }
    }
}

/// Data processing with a shifted register operand. Rows with a PC
/// destination degrade to the flag-setting compare forms when S is set and
/// are unpredictable otherwise.
fn data_proc_shifted_reg(word: u32) -> Encoding {
    let op = (word >> 21) & 0b1111;
    let Rn_pc = (word >> 16) & 0b1111 == 0b1111;
    let Rd_pc = (word >> 8) & 0b1111 == 0b1111;
    let S = (word >> 20) & 0b1 != 0;

    match op {
        0b0000 => {
            if Rd_pc {
                if S {
                    Encoding::TST_REG_T2
                } else {
                    Encoding::UNPREDICTABLE
                }
            } else {
                Encoding::AND_REG_T2
            }
        }
        0b0001 => Encoding::BIC_REG_T2,
        0b0010 => {
            if Rn_pc {
                move_and_imm_shift(word)
            } else {
                Encoding::ORR_REG_T2
            }
        }
        0b0011 => {
            if Rn_pc {
                Encoding::MVN_REG_T2
            } else {
                Encoding::ORN_REG_T1
            }
        }
        0b0100 => {
            if Rd_pc {
                if S {
                    Encoding::TEQ_REG_T1
                } else {
                    Encoding::UNPREDICTABLE
                }
            } else {
                Encoding::EOR_REG_T2
            }
        }
        // covers both pack-halfword variants; the tb bit is not inspected
        0b0110 => Encoding::PKHBT_T1,
        0b1000 => {
            if Rd_pc {
                if S {
                    Encoding::CMN_REG_T2
                } else {
                    Encoding::UNPREDICTABLE
                }
            } else {
                Encoding::ADD_REG_T3
            }
        }
        0b1010 => Encoding::ADC_REG_T2,
        0b1011 => Encoding::SBC_REG_T2,
        0b1101 => {
            if Rd_pc {
                if S {
                    Encoding::CMP_REG_T3
                } else {
                    Encoding::UNPREDICTABLE
                }
            } else {
                Encoding::SUB_REG_T2
            }
        }
        0b1110 => Encoding::RSB_REG_T1,
        _ => Encoding::UNDEFINED,
    }
}

/// Data processing with a modified 12-bit immediate. The table ignores the
/// low bit of the 5-bit op field (it is the S bit).
fn data_proc_modified_imm(word: u32) -> Encoding {
    let op = (word >> 20) & 0b11111;
    let Rn_pc = (word >> 16) & 0b1111 == 0b1111;
    let Rd_pc = (word >> 8) & 0b1111 == 0b1111;

    match op >> 1 {
        0b0000 => {
            if Rd_pc {
                Encoding::TST_IMM_T1
            } else {
                Encoding::AND_IMM_T1
            }
        }
        0b0001 => Encoding::BIC_IMM_T1,
        0b0010 => {
            if Rn_pc {
                Encoding::MOV_IMM_T2
            } else {
                Encoding::ORR_IMM_T1
            }
        }
        0b0011 => {
            if Rn_pc {
                Encoding::MVN_IMM_T1
            } else {
                Encoding::ORN_IMM_T1
            }
        }
        0b0100 => {
            if Rd_pc {
                Encoding::TEQ_IMM_T1
            } else {
                Encoding::EOR_IMM_T1
            }
        }
        0b1000 => {
            if Rd_pc {
                Encoding::CMN_IMM_T1
            } else {
                Encoding::ADD_IMM_T3
            }
        }
        0b1010 => Encoding::ADC_IMM_T1,
        0b1011 => Encoding::SBC_IMM_T1,
        0b1101 => {
            if Rd_pc {
                Encoding::CMP_IMM_T2
            } else {
                Encoding::SUB_IMM_T3
            }
        }
        0b1110 => Encoding::RSB_IMM_T2,
        _ => Encoding::UNDEFINED,
    }
}

/// Data processing with a plain binary immediate: address generation,
/// move-wide, saturate and bit-field rows.
fn data_proc_plain_imm(word: u32) -> Encoding {
    let op = (word >> 20) & 0b11111;
    let Rn_pc = (word >> 16) & 0b1111 == 0b1111;
    let imm3 = (word >> 12) & 0b111;
    let imm2 = (word >> 6) & 0b11;
    let imm_nonzero = (imm3 << 2) | imm2 != 0;

    match op {
        0b00000 => {
            if Rn_pc {
                Encoding::ADR_T3
            } else {
                Encoding::ADD_IMM_T4
            }
        }
        0b00100 => Encoding::MOV_IMM_T3,
        0b01010 => {
            if Rn_pc {
                Encoding::ADR_T2
            } else {
                Encoding::SUB_IMM_T4
            }
        }
        0b01100 => Encoding::MOVT_T1,
        0b10000 => Encoding::SSAT_T1,
        0b10010 => {
            if imm_nonzero {
                Encoding::SSAT16_T1
            } else {
                Encoding::SSAT_T1
            }
        }
        0b10100 => Encoding::SBFX_T1,
        0b10110 => {
            if Rn_pc {
                Encoding::BFC_T1
            } else {
                Encoding::BFI_T1
            }
        }
        0b11000 => Encoding::USAT_T1,
        0b11010 => {
            if imm_nonzero {
                Encoding::USAT16_T1
            } else {
                Encoding::USAT_T1
            }
        }
        0b11100 => Encoding::UBFX_T1,
        _ => Encoding::UNDEFINED,
    }
}

/// Hint instructions behind the branches-and-misc block.
fn hints(word: u32) -> Encoding {
    let op1 = (word >> 8) & 0b111;
    let op2 = word & 0b11111111;
    if op1 != 0b000 {
        return Encoding::UNDEFINED;
    }

    match op2 {
        0b00000000 => Encoding::NOP_T2,
        0b00000001 => Encoding::YIELD_T2,
        0b00000010 => Encoding::WFE_T2,
        0b00000011 => Encoding::WFI_T2,
        0b00000100 => Encoding::SEV_T2,
        _ => {
            if op2 & 0b11110000 == 0b11110000 {
                Encoding::DBG_T1
            } else {
                Encoding::UNDEFINED
            }
        }
    }
}

/// Memory barriers and exclusive-monitor clear.
fn misc_control(word: u32) -> Encoding {
    match (word >> 4) & 0b1111 {
        0b0010 => Encoding::CLREX_T1,
        0b0100 => Encoding::DSB_T1,
        0b0101 => Encoding::DMB_T1,
        0b0110 => Encoding::ISB_T1,
        _ => Encoding::UNDEFINED,
    }
}

/// Branches, branch with link, and miscellaneous control.
fn branches_misc_control(word: u32) -> Encoding {
    let op1 = (word >> 12) & 0b111;
    let op = (word >> 20) & 0b1111111;

    // permanently undefined space
    if op1 == 0b010 && op == 0b1111111 {
        return Encoding::UNDEFINED;
    }

    match op1 & 0b101 {
        0b101 => Encoding::BL_T1,
        0b001 => Encoding::B_T4,
        0b000 => {
            if (op >> 3) & 0b111 != 0b111 {
                return Encoding::B_T3;
            }
            match op {
                0b0111000 | 0b0111001 => Encoding::MSR_T1,
                0b0111010 => hints(word),
                0b0111011 => misc_control(word),
                0b0111110 | 0b0111111 => Encoding::MRS_T1,
                _ => Encoding::UNDEFINED,
            }
        }
        _ => Encoding::UNDEFINED,
    }
}

fn cdp(word: u32) -> Encoding {
    if (word >> 28) & 0b1 != 0 {
        Encoding::CDP_T2
    } else {
        Encoding::CDP_T1
    }
}

fn mcr(word: u32) -> Encoding {
    if (word >> 28) & 0b1 != 0 {
        Encoding::MCR_T2
    } else {
        Encoding::MCR_T1
    }
}

fn mrc(word: u32) -> Encoding {
    if (word >> 28) & 0b1 != 0 {
        Encoding::MRC_T2
    } else {
        Encoding::MRC_T1
    }
}

fn mcrr(word: u32) -> Encoding {
    if (word >> 28) & 0b1 != 0 {
        Encoding::MCRR_T2
    } else {
        Encoding::MCRR_T1
    }
}

fn mrrc(word: u32) -> Encoding {
    if (word >> 28) & 0b1 != 0 {
        Encoding::MRRC_T2
    } else {
        Encoding::MRRC_T1
    }
}

fn ldc_lit(word: u32) -> Encoding {
    if (word >> 28) & 0b1 != 0 {
        Encoding::LDC_LIT_T2
    } else {
        Encoding::LDC_LIT_T1
    }
}

fn ldc(word: u32) -> Encoding {
    if (word >> 16) & 0b1111 == 0b1111 {
        return ldc_lit(word);
    }

    if (word >> 28) & 0b1 != 0 {
        Encoding::LDC_IMM_T2
    } else {
        Encoding::LDC_IMM_T1
    }
}

fn stc(word: u32) -> Encoding {
    if (word >> 28) & 0b1 != 0 {
        Encoding::STC_T2
    } else {
        Encoding::STC_T1
    }
}

/// Coprocessor instructions. Each family splits on bit 28 into the two
/// generations of the same mnemonic.
fn coprocessor(word: u32) -> Encoding {
    let op1 = (word >> 20) & 0b111111;
    let op = (word >> 4) & 0b1;

    if (op1 >> 4) & 0b11 == 0b10 {
        if op == 0 {
            return cdp(word);
        }
        return if op1 & 0b1 == 0b1 { mcr(word) } else { mrc(word) };
    }

    if op1 | 0b000101 == 0b000101 {
        return if op1 & 0b100 == 0b100 {
            if op1 & 0b1 == 0b1 {
                mrrc(word)
            } else {
                mcrr(word)
            }
        } else {
            Encoding::UNDEFINED
        };
    }

    if op1 >> 5 == 0b0 {
        return if op1 & 0b1 == 0b1 { ldc(word) } else { stc(word) };
    }

    Encoding::UNDEFINED
}

/// Saturating add/subtract, reverse, bit reverse, select and count leading
/// zeros.
fn misc_operations(word: u32) -> Encoding {
    if (word >> 12) & 0b1111 != 0b1111 {
        return Encoding::UNDEFINED;
    }
    let op1 = (word >> 20) & 0b11;
    let op2 = (word >> 4) & 0b11;

    match op1 {
        0b00 => match op2 {
            0b00 => Encoding::QADD_T1,
            0b01 => Encoding::QDADD_T1,
            0b10 => Encoding::QSUB_T1,
            _ => Encoding::QDSUB_T1,
        },
        0b01 => match op2 {
            0b00 => Encoding::REV_T2,
            0b01 => Encoding::REV16_T2,
            0b10 => Encoding::RBIT_T1,
            _ => Encoding::REVSH_T2,
        },
        0b10 => {
            if op2 == 0 {
                Encoding::SEL_T1
            } else {
                Encoding::UNDEFINED
            }
        }
        _ => {
            if op2 == 0 {
                Encoding::CLZ_T1
            } else {
                Encoding::UNDEFINED
            }
        }
    }
}

fn parallel_add_sub_signed(word: u32) -> Encoding {
    if (word >> 12) & 0b1111 != 0b1111 {
        return Encoding::UNDEFINED;
    }
    let op1 = (word >> 20) & 0b11;
    let op2 = (word >> 4) & 0b11;

    match op2 {
        0b00 => match op1 {
            0b000 => Encoding::SADD8_T1,
            0b001 => Encoding::SADD16_T1,
            0b010 => Encoding::SASX_T1,
            0b100 => Encoding::SSUB8_T1,
            0b101 => Encoding::SSUB16_T1,
            0b110 => Encoding::SSAX_T1,
            _ => Encoding::UNDEFINED,
        },
        0b01 => match op1 {
            0b000 => Encoding::QADD8_T1,
            0b001 => Encoding::QADD16_T1,
            0b010 => Encoding::QASX_T1,
            0b100 => Encoding::QSUB8_T1,
            0b101 => Encoding::QSUB16_T1,
            0b110 => Encoding::QSAX_T1,
            _ => Encoding::UNDEFINED,
        },
        0b10 => match op1 {
            0b000 => Encoding::SHADD8_T1,
            0b001 => Encoding::SHADD16_T1,
            0b010 => Encoding::SHASX_T1,
            0b100 => Encoding::SHSUB8_T1,
            0b101 => Encoding::SHSUB16_T1,
            0b110 => Encoding::SHSAX_T1,
            _ => Encoding::UNDEFINED,
        },
        _ => Encoding::UNDEFINED,
    }
}

fn parallel_add_sub_unsigned(word: u32) -> Encoding {
    if (word >> 12) & 0b1111 != 0b1111 {
        return Encoding::UNDEFINED;
    }
    let op1 = (word >> 20) & 0b11;
    let op2 = (word >> 4) & 0b11;

    match op2 {
        0b00 => match op1 {
            0b000 => Encoding::UADD8_T1,
            0b001 => Encoding::UADD16_T1,
            0b010 => Encoding::UASX_T1,
            0b100 => Encoding::USUB8_T1,
            0b101 => Encoding::USUB16_T1,
            0b110 => Encoding::USAX_T1,
            _ => Encoding::UNDEFINED,
        },
        0b01 => match op1 {
            0b000 => Encoding::UQADD8_T1,
            0b001 => Encoding::UQADD16_T1,
            0b010 => Encoding::UQASX_T1,
            0b100 => Encoding::UQSUB8_T1,
            0b101 => Encoding::UQSUB16_T1,
            0b110 => Encoding::UQSAX_T1,
            _ => Encoding::UNDEFINED,
        },
        0b10 => match op1 {
            0b000 => Encoding::UHADD8_T1,
            0b001 => Encoding::UHADD16_T1,
            0b010 => Encoding::UHASX_T1,
            0b100 => Encoding::UHSUB8_T1,
            0b101 => Encoding::UHSUB16_T1,
            0b110 => Encoding::UHSAX_T1,
            _ => Encoding::UNDEFINED,
        },
        _ => Encoding::UNDEFINED,
    }
}

/// Data processing (register): register shifts, extend and extend-with-add
/// rows, then the misc and parallel add/subtract sub-tables.
fn data_proc_register(word: u32) -> Encoding {
    // 1111 1010 aaaa nnnn 1111 ---- bbbb ----
    if (word >> 12) & 0b1111 != 0b1111 {
        return Encoding::UNDEFINED;
    }

    let op1 = (word >> 20) & 0b1111;
    let Rn_pc = (word >> 16) & 0b1111 == 0b1111;
    let op2 = (word >> 4) & 0b1111;

    if op2 & 0b1000 != 0 {
        return match op1 {
            0b0000 => {
                if Rn_pc {
                    Encoding::SXTH_T2
                } else {
                    Encoding::SXTAH_T1
                }
            }
            0b0001 => {
                if Rn_pc {
                    Encoding::UXTH_T2
                } else {
                    Encoding::UXTAH_T1
                }
            }
            0b0010 => {
                if Rn_pc {
                    Encoding::SXTB16_T1
                } else {
                    Encoding::SXTAB16_T1
                }
            }
            0b0011 => {
                if Rn_pc {
                    Encoding::UXTB16_T1
                } else {
                    Encoding::UXTAB16_T1
                }
            }
            0b0100 => {
                if Rn_pc {
                    Encoding::SXTB_T2
                } else {
                    Encoding::SXTAB_T1
                }
            }
            0b0101 => {
                if Rn_pc {
                    Encoding::UXTB_T2
                } else {
                    Encoding::UXTAB_T1
                }
            }
            _ => {
                if op2 & 0b0100 == 0 && op1 & 0b1100 == 0b1000 {
                    misc_operations(word)
                } else {
                    Encoding::UNDEFINED
                }
            }
        };
    }

    if op1 & 0b1000 != 0 {
        return if op2 & 0b0100 != 0 {
            parallel_add_sub_unsigned(word)
        } else {
            parallel_add_sub_signed(word)
        };
    }

    if op2 != 0 {
        return Encoding::UNDEFINED;
    }

    match op1 >> 1 {
        0b000 => Encoding::LSL_REG_T2,
        0b001 => Encoding::LSR_REG_T2,
        0b010 => Encoding::ASR_REG_T2,
        0b011 => Encoding::ROR_REG_T2,
        _ => Encoding::UNDEFINED,
    }
}

/// Multiply, multiply accumulate and absolute difference. X and W select
/// which half of each 32-bit operand participates; a PC accumulator field
/// turns the accumulate forms into their plain-multiply counterparts.
fn multiply_diff(word: u32) -> Encoding {
    if (word >> 6) & 0b11 != 0b00 {
        return Encoding::UNDEFINED;
    }
    let op1 = (word >> 20) & 0b111;
    let op2 = (word >> 4) & 0b11;
    if op2 & 0b10 != 0 && op1 != 0b001 {
        return Encoding::UNDEFINED;
    }
    let Ra_pc = (word >> 12) & 0b1111 == 0b1111;
    let X = (word >> 4) & 0b1 == 0b1;
    let W = (word >> 5) & 0b1 == 0b1;

    match op1 {
        0b000 => {
            if op2 == 0b00 {
                if Ra_pc {
                    Encoding::MUL_T2
                } else {
                    Encoding::MLA_T1
                }
            } else {
                Encoding::MLS_T1
            }
        }
        0b001 => {
            if Ra_pc {
                match (W, X) {
                    (true, true) => Encoding::SMULTT_T1,
                    (true, false) => Encoding::SMULTB_T1,
                    (false, true) => Encoding::SMULBT_T1,
                    (false, false) => Encoding::SMULBB_T1,
                }
            } else {
                match (W, X) {
                    (true, true) => Encoding::SMLATT_T1,
                    (true, false) => Encoding::SMLATB_T1,
                    (false, true) => Encoding::SMLABT_T1,
                    (false, false) => Encoding::SMLABB_T1,
                }
            }
        }
        0b010 => {
            if Ra_pc {
                if X {
                    Encoding::SMUADX_T1
                } else {
                    Encoding::SMUAD_T1
                }
            } else if X {
                Encoding::SMLADX_T1
            } else {
                Encoding::SMLAD_T1
            }
        }
        0b011 => {
            if Ra_pc {
                if X {
                    Encoding::SMULWT_T1
                } else {
                    Encoding::SMULWB_T1
                }
            } else if X {
                Encoding::SMLAWT_T1
            } else {
                Encoding::SMLAWB_T1
            }
        }
        0b100 => {
            if Ra_pc {
                if X {
                    Encoding::SMUSDX_T1
                } else {
                    Encoding::SMUSD_T1
                }
            } else if X {
                Encoding::SMLSDX_T1
            } else {
                Encoding::SMLSD_T1
            }
        }
        0b101 => {
            if Ra_pc {
                if X {
                    Encoding::SMMULR_T1
                } else {
                    Encoding::SMMUL_T1
                }
            } else if X {
                Encoding::SMMLAR_T1
            } else {
                Encoding::SMMLA_T1
            }
        }
        0b110 => {
            if X {
                Encoding::SMMLSR_T1
            } else {
                Encoding::SMMLS_T1
            }
        }
        _ => {
            if op2 != 0b00 {
                return Encoding::UNDEFINED;
            }
            if Ra_pc {
                Encoding::USAD8_T1
            } else {
                Encoding::USADA8_T1
            }
        }
    }
}

/// Long multiply, long multiply accumulate and divide.
fn long_multiply_div(word: u32) -> Encoding {
    let op1 = (word >> 20) & 0b111;
    let op2 = (word >> 4) & 0b1111;

    match op1 {
        0b000 => {
            if op2 == 0 {
                Encoding::SMULL_T1
            } else {
                Encoding::UNDEFINED
            }
        }
        0b001 => {
            if op2 == 0b1111 {
                Encoding::SDIV_T1
            } else {
                Encoding::UNDEFINED
            }
        }
        0b010 => {
            if op2 == 0 {
                Encoding::UMULL_T1
            } else {
                Encoding::UNDEFINED
            }
        }
        0b011 => {
            if op2 == 0b1111 {
                Encoding::UDIV_T1
            } else {
                Encoding::UNDEFINED
            }
        }
        0b100 => match op2 {
            0b0000 => Encoding::SMLAL_T1,
            0b1000 => Encoding::SMLALBB_T1,
            0b1001 => Encoding::SMLALBT_T1,
            0b1010 => Encoding::SMLALTB_T1,
            0b1011 => Encoding::SMLALTT_T1,
            0b1100 => Encoding::SMLALD_T1,
            0b1101 => Encoding::SMLALDX_T1,
            _ => Encoding::UNDEFINED,
        },
        0b101 => match op2 {
            0b1100 => Encoding::SMLSLD_T1,
            0b1101 => Encoding::SMLSLDX_T1,
            _ => Encoding::UNDEFINED,
        },
        0b110 => match op2 {
            0b0000 => Encoding::UMLAL_T1,
            0b0110 => Encoding::UMAAL_T1,
            _ => Encoding::UNDEFINED,
        },
        _ => Encoding::UNDEFINED,
    }
}

/// Load word. A PC base is the literal form; the sub-opcode field separates
/// register-offset, negative-indexed immediate and unprivileged forms.
fn load_word(word: u32) -> Encoding {
    let op1 = (word >> 23) & 0b11;
    let op2 = (word >> 6) & 0b111111;
    let Rn_pc = (word >> 16) & 0b1111 == 0b1111;

    if op1 & 0b10 != 0 {
        return Encoding::UNDEFINED;
    }

    if Rn_pc {
        return Encoding::LDR_LIT_T2;
    }

    if op1 == 0b01 {
        return Encoding::LDR_IMM_T3;
    }

    if op2 == 0 {
        return Encoding::LDR_REG_T2;
    }

    let op3 = op2 >> 2;

    if op3 == 0b1100 || op3 & 0b1001 == 0b1001 {
        return Encoding::LDR_IMM_T4;
    }

    if op3 == 0b1110 {
        return Encoding::LDRT_T1;
    }

    Encoding::UNDEFINED
}

/// Load halfword and its preload-space rows. A PC destination in this space
/// is mostly unallocated, with two unpredictable sub-ranges.
fn load_halfword(word: u32) -> Encoding {
    let op1 = (word >> 23) & 0b11;
    let op2 = (word >> 6) & 0b111111;
    let Rn_pc = (word >> 16) & 0b1111 == 0b1111;
    let Rt_pc = (word >> 12) & 0b1111 == 0b1111;

    if Rn_pc {
        return if Rt_pc {
            if op1 & 0b10 != 0 {
                Encoding::UNALLOCATED
            } else {
                Encoding::UNPREDICTABLE
            }
        } else if op1 & 0b10 == 0 {
            Encoding::LDRH_LIT_T1
        } else {
            Encoding::LDRSH_LIT_T1
        };
    }

    if Rt_pc {
        if op1 & 0b01 != 0 {
            return Encoding::UNALLOCATED;
        }

        if op2 == 0 || op2 & 0b111100 == 0b1100 {
            return Encoding::UNALLOCATED;
        }

        if op2 & 0b100100 == 0b100100 || op2 & 0b111100 == 0b111000 {
            return Encoding::UNPREDICTABLE;
        }

        return Encoding::UNDEFINED;
    }

    match op1 {
        0b01 => Encoding::LDRH_IMM_T3,
        0b11 => Encoding::LDRSH_IMM_T1,
        0b00 => {
            if op2 == 0 {
                return Encoding::LDRH_REG_T2;
            }
            if op2 & 0b100100 == 0b100100 {
                return Encoding::LDRH_IMM_T3;
            }
            if op2 & 0b111100 == 0b110000 {
                return Encoding::LDRH_IMM_T3;
            }
            if op2 & 0b111100 == 0b111000 {
                return Encoding::LDRHT_T1;
            }
            Encoding::UNDEFINED
        }
        _ => {
            if op2 == 0 {
                return Encoding::LDRSH_REG_T2;
            }
            if op2 & 0b100100 == 0b100100 {
                return Encoding::LDRSH_IMM_T2;
            }
            if op2 & 0b111100 == 0b110000 {
                return Encoding::LDRSH_IMM_T2;
            }
            if op2 & 0b111100 == 0b111000 {
                return Encoding::LDRSHT_T1;
            }
            Encoding::UNDEFINED
        }
    }
}

/// Load byte and the preload hints. A PC destination selects the PLD/PLI
/// hint space instead of an ordinary load.
fn load_byte_preload(word: u32) -> Encoding {
    let op1 = (word >> 23) & 0b11;
    let op2 = (word >> 6) & 0b111111;
    let Rn_pc = (word >> 16) & 0b1111 == 0b1111;
    let Rt_pc = (word >> 12) & 0b1111 == 0b1111;

    if Rt_pc {
        if Rn_pc {
            return match op1 {
                0b00 | 0b01 => Encoding::PLD_LIT_T1,
                _ => Encoding::PLI_IMM_LIT_T3,
            };
        }

        return match op1 {
            0b01 => Encoding::PLD_IMM_T1,
            0b11 => Encoding::PLI_IMM_LIT_T1,
            0b00 => {
                if op2 == 0 {
                    return Encoding::PLD_REG_T1;
                }
                if op2 & 0b100100 == 0b100100 {
                    return Encoding::UNPREDICTABLE;
                }
                if op2 & 0b111100 == 0b110000 {
                    return Encoding::PLD_IMM_T2;
                }
                if op2 & 0b111100 == 0b111000 {
                    return Encoding::UNPREDICTABLE;
                }
                Encoding::UNDEFINED
            }
            _ => {
                if op2 == 0 {
                    return Encoding::PLI_REG_T1;
                }
                if op2 & 0b100100 == 0b100100 {
                    return Encoding::UNPREDICTABLE;
                }
                if op2 & 0b111100 == 0b110000 {
                    return Encoding::PLD_IMM_LIT_T2;
                }
                if op2 & 0b111100 == 0b111000 {
                    return Encoding::UNPREDICTABLE;
                }
                Encoding::UNDEFINED
            }
        };
    }

    if Rn_pc {
        return match op1 {
            0b00 | 0b01 => Encoding::LDRB_LIT_T1,
            _ => Encoding::LDRSB_LIT_T1,
        };
    }

    match op1 {
        0b01 => Encoding::LDRB_IMM_T2,
        0b11 => Encoding::LDRSB_IMM_T1,
        0b00 => {
            if op2 == 0 {
                return Encoding::LDRB_REG_T2;
            }
            if op2 & 0b100100 == 0b100100 {
                return Encoding::LDRB_IMM_T3;
            }
            if op2 & 0b111100 == 0b110000 {
                return Encoding::LDRB_IMM_T3;
            }
            if op2 & 0b111100 == 0b111000 {
                return Encoding::LDRBT_T1;
            }
            Encoding::UNDEFINED
        }
        _ => {
            if op2 == 0 {
                return Encoding::LDRSB_REG_T2;
            }
            if op2 & 0b100100 == 0b100100 {
                return Encoding::LDRSB_IMM_T2;
            }
            if op2 & 0b111100 == 0b110000 {
                return Encoding::LDRSB_IMM_T2;
            }
            if op2 & 0b111100 == 0b111000 {
                return Encoding::LDRSBT_T1;
            }
            Encoding::UNDEFINED
        }
    }
}

/// Store single data item, by size and offset form.
fn store_single(word: u32) -> Encoding {
    let op1 = (word >> 21) & 0b111;
    let op2 = (word >> 11) & 0b1;

    match op1 {
        0b000 => {
            if op2 == 0 {
                Encoding::STRB_REG_T2
            } else {
                Encoding::STRB_IMM_T3
            }
        }
        0b001 => {
            if op2 == 0 {
                Encoding::STRH_REG_T2
            } else {
                Encoding::STRH_IMM_T3
            }
        }
        0b010 => {
            if op2 == 0 {
                Encoding::STR_REG_T2
            } else {
                Encoding::STR_IMM_T4
            }
        }
        0b100 => Encoding::STRB_IMM_T2,
        0b101 => Encoding::STRH_IMM_T2,
        0b110 => Encoding::STR_IMM_T3,
        _ => Encoding::UNDEFINED,
    }
}
