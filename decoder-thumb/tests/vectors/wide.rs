use thumb::{decode_wide, Encoding};

#[track_caller]
fn test_decode(word: u32, expected: Encoding) {
    let decoded = decode_wide(word, false);
    assert!(
        decoded == expected,
        "decode error for {:#010x}:\n  decoded: {:?}\n expected: {:?}\n",
        word,
        decoded,
        expected
    );
}

#[test]
fn load_store_multiple_rows() {
    test_decode(0xE880_0000, Encoding::STM_T2);
    test_decode(0xE890_0000, Encoding::LDM_T2);
    // writeback to SP is the architected POP/PUSH form
    test_decode(0xE8BD_0000, Encoding::POP_T2);
    test_decode(0xE92D_0000, Encoding::PUSH_T2);
    test_decode(0xE900_0000, Encoding::STMDB_T1);
    test_decode(0xE910_0000, Encoding::LDMDB_T1);
}

#[test]
fn load_store_dual_exclusive_rows() {
    test_decode(0xE840_0000, Encoding::STREX_T1);
    test_decode(0xE850_0000, Encoding::LDREX_T1);
    test_decode(0xE860_0000, Encoding::STRD_IMM_T1);
    test_decode(0xE940_0000, Encoding::STRD_IMM_T1);
    test_decode(0xE950_0000, Encoding::LDRD_IMM_T1);
    test_decode(0xE95F_0000, Encoding::LDRD_LIT_T1);
    test_decode(0xE8C0_0F40, Encoding::STREXB_T1);
    test_decode(0xE8C0_0F50, Encoding::STREXH_T1);
    test_decode(0xE8C0_0F00, Encoding::UNDEFINED);
    test_decode(0xE8D0_0000, Encoding::TBB_T1);
    test_decode(0xE8D0_0010, Encoding::TBH_T1);
    test_decode(0xE8D0_0F4F, Encoding::LDREXB_T1);
    test_decode(0xE8D0_0F5F, Encoding::LDREXH_T1);
}

#[test]
fn data_processing_shifted_register_rows() {
    test_decode(0xEA00_0000, Encoding::AND_REG_T2);
    test_decode(0xEA10_0F00, Encoding::TST_REG_T2);
    test_decode(0xEA00_0F00, Encoding::UNPREDICTABLE);
    test_decode(0xEA20_0000, Encoding::BIC_REG_T2);
    test_decode(0xEA40_0000, Encoding::ORR_REG_T2);
    test_decode(0xEA60_0000, Encoding::ORN_REG_T1);
    test_decode(0xEA6F_0000, Encoding::MVN_REG_T2);
    test_decode(0xEA80_0000, Encoding::EOR_REG_T2);
    test_decode(0xEA90_0F00, Encoding::TEQ_REG_T1);
    test_decode(0xEA80_0F00, Encoding::UNPREDICTABLE);
    // one row covers both pack-halfword variants
    test_decode(0xEAC0_0000, Encoding::PKHBT_T1);
    test_decode(0xEAC0_0020, Encoding::PKHBT_T1);
    test_decode(0xEB00_0000, Encoding::ADD_REG_T3);
    test_decode(0xEB10_0F00, Encoding::CMN_REG_T2);
    test_decode(0xEB40_0000, Encoding::ADC_REG_T2);
    test_decode(0xEB60_0000, Encoding::SBC_REG_T2);
    test_decode(0xEBA0_0000, Encoding::SUB_REG_T2);
    test_decode(0xEBB0_0F00, Encoding::CMP_REG_T3);
    test_decode(0xEBC0_0000, Encoding::RSB_REG_T1);
    test_decode(0xEAA0_0000, Encoding::UNDEFINED);
}

#[test]
fn move_and_immediate_shift_rows() {
    // a zero shift amount degenerates LSL to MOV and ROR to RRX
    test_decode(0xEA4F_0000, Encoding::MOV_REG_T3);
    test_decode(0xEA4F_1000, Encoding::LSL_IMM_T2);
    test_decode(0xEA4F_0040, Encoding::LSL_IMM_T2);
    test_decode(0xEA4F_0010, Encoding::LSR_IMM_T2);
    test_decode(0xEA4F_0020, Encoding::ASR_IMM_T2);
    test_decode(0xEA4F_0030, Encoding::RRX_T1);
    test_decode(0xEA4F_1030, Encoding::ROR_IMM_T1);
}

#[test]
fn data_processing_modified_immediate_rows() {
    test_decode(0xF000_0000, Encoding::AND_IMM_T1);
    test_decode(0xF010_0F00, Encoding::TST_IMM_T1);
    test_decode(0xF020_0000, Encoding::BIC_IMM_T1);
    test_decode(0xF040_0000, Encoding::ORR_IMM_T1);
    test_decode(0xF04F_0000, Encoding::MOV_IMM_T2);
    test_decode(0xF060_0000, Encoding::ORN_IMM_T1);
    test_decode(0xF06F_0000, Encoding::MVN_IMM_T1);
    test_decode(0xF080_0000, Encoding::EOR_IMM_T1);
    test_decode(0xF090_0F00, Encoding::TEQ_IMM_T1);
    test_decode(0xF100_0000, Encoding::ADD_IMM_T3);
    test_decode(0xF110_0F00, Encoding::CMN_IMM_T1);
    test_decode(0xF140_0000, Encoding::ADC_IMM_T1);
    test_decode(0xF160_0000, Encoding::SBC_IMM_T1);
    test_decode(0xF1A0_0000, Encoding::SUB_IMM_T3);
    test_decode(0xF1B0_0F00, Encoding::CMP_IMM_T2);
    test_decode(0xF1C0_0000, Encoding::RSB_IMM_T2);
    test_decode(0xF0A0_0000, Encoding::UNDEFINED);
}

#[test]
fn data_processing_plain_immediate_rows() {
    test_decode(0xF200_0000, Encoding::ADD_IMM_T4);
    test_decode(0xF20F_0000, Encoding::ADR_T3);
    test_decode(0xF240_0000, Encoding::MOV_IMM_T3);
    test_decode(0xF2A0_0000, Encoding::SUB_IMM_T4);
    test_decode(0xF2AF_0000, Encoding::ADR_T2);
    test_decode(0xF2C0_0000, Encoding::MOVT_T1);
    test_decode(0xF300_0000, Encoding::SSAT_T1);
    test_decode(0xF320_0000, Encoding::SSAT_T1);
    test_decode(0xF320_1000, Encoding::SSAT16_T1);
    test_decode(0xF320_0040, Encoding::SSAT16_T1);
    test_decode(0xF340_0000, Encoding::SBFX_T1);
    test_decode(0xF360_0000, Encoding::BFI_T1);
    test_decode(0xF36F_0000, Encoding::BFC_T1);
    test_decode(0xF380_0000, Encoding::USAT_T1);
    test_decode(0xF3A0_0000, Encoding::USAT_T1);
    test_decode(0xF3A0_1000, Encoding::USAT16_T1);
    test_decode(0xF3C0_0000, Encoding::UBFX_T1);
    test_decode(0xF220_0000, Encoding::UNDEFINED);
}

#[test]
fn branch_rows() {
    test_decode(0xF000_D000, Encoding::BL_T1);
    test_decode(0xF000_9000, Encoding::B_T4);
    test_decode(0xF000_8000, Encoding::B_T3);
    test_decode(0xF43F_8000, Encoding::B_T3);
    // permanently undefined space
    test_decode(0xF7F0_A000, Encoding::UNDEFINED);
}

#[test]
fn status_register_and_misc_control_rows() {
    test_decode(0xF380_8800, Encoding::MSR_T1);
    test_decode(0xF3EF_8000, Encoding::MRS_T1);
    test_decode(0xF3BF_8F2F, Encoding::CLREX_T1);
    test_decode(0xF3BF_8F4F, Encoding::DSB_T1);
    test_decode(0xF3BF_8F5F, Encoding::DMB_T1);
    test_decode(0xF3BF_8F6F, Encoding::ISB_T1);
    test_decode(0xF3BF_8F0F, Encoding::UNDEFINED);
}

#[test]
fn hint_rows() {
    test_decode(0xF3AF_8000, Encoding::NOP_T2);
    test_decode(0xF3AF_8001, Encoding::YIELD_T2);
    test_decode(0xF3AF_8002, Encoding::WFE_T2);
    test_decode(0xF3AF_8003, Encoding::WFI_T2);
    test_decode(0xF3AF_8004, Encoding::SEV_T2);
    test_decode(0xF3AF_80F5, Encoding::DBG_T1);
    test_decode(0xF3AF_8005, Encoding::UNDEFINED);
    test_decode(0xF3AF_8105, Encoding::UNDEFINED);
}

#[test]
fn coprocessor_rows() {
    // each family splits on bit 28 into the two mnemonic generations
    test_decode(0xEE00_0000, Encoding::CDP_T1);
    test_decode(0xFE00_0000, Encoding::CDP_T2);
    test_decode(0xEE10_0010, Encoding::MCR_T1);
    test_decode(0xFE10_0010, Encoding::MCR_T2);
    test_decode(0xEE00_0010, Encoding::MRC_T1);
    test_decode(0xFE00_0010, Encoding::MRC_T2);
    test_decode(0xEC40_0000, Encoding::MCRR_T1);
    test_decode(0xFC40_0000, Encoding::MCRR_T2);
    test_decode(0xEC50_0000, Encoding::MRRC_T1);
    test_decode(0xFC50_0000, Encoding::MRRC_T2);
    test_decode(0xEC90_0000, Encoding::LDC_IMM_T1);
    test_decode(0xFC90_0000, Encoding::LDC_IMM_T2);
    test_decode(0xEC9F_0000, Encoding::LDC_LIT_T1);
    test_decode(0xFC9F_0000, Encoding::LDC_LIT_T2);
    test_decode(0xEC80_0000, Encoding::STC_T1);
    test_decode(0xFC80_0000, Encoding::STC_T2);
    test_decode(0xEC00_0000, Encoding::UNDEFINED);
    test_decode(0xEF00_0000, Encoding::UNDEFINED);
}

#[test]
fn data_processing_register_rows() {
    test_decode(0xFA00_F000, Encoding::LSL_REG_T2);
    test_decode(0xFA20_F000, Encoding::LSR_REG_T2);
    test_decode(0xFA40_F000, Encoding::ASR_REG_T2);
    test_decode(0xFA60_F000, Encoding::ROR_REG_T2);
    test_decode(0xFA0F_F080, Encoding::SXTH_T2);
    test_decode(0xFA00_F080, Encoding::SXTAH_T1);
    test_decode(0xFA1F_F080, Encoding::UXTH_T2);
    test_decode(0xFA10_F080, Encoding::UXTAH_T1);
    test_decode(0xFA2F_F080, Encoding::SXTB16_T1);
    test_decode(0xFA20_F080, Encoding::SXTAB16_T1);
    test_decode(0xFA3F_F080, Encoding::UXTB16_T1);
    test_decode(0xFA30_F080, Encoding::UXTAB16_T1);
    test_decode(0xFA4F_F080, Encoding::SXTB_T2);
    test_decode(0xFA40_F080, Encoding::SXTAB_T1);
    test_decode(0xFA5F_F080, Encoding::UXTB_T2);
    test_decode(0xFA50_F080, Encoding::UXTAB_T1);
    // the fixed ones field gates the whole table
    test_decode(0xFA00_0000, Encoding::UNDEFINED);
}

#[test]
fn misc_operation_rows() {
    test_decode(0xFA80_F080, Encoding::QADD_T1);
    test_decode(0xFA80_F090, Encoding::QDADD_T1);
    test_decode(0xFA80_F0A0, Encoding::QSUB_T1);
    test_decode(0xFA80_F0B0, Encoding::QDSUB_T1);
    test_decode(0xFA90_F080, Encoding::REV_T2);
    test_decode(0xFA90_F090, Encoding::REV16_T2);
    test_decode(0xFA90_F0A0, Encoding::RBIT_T1);
    test_decode(0xFA90_F0B0, Encoding::REVSH_T2);
    test_decode(0xFAA0_F080, Encoding::SEL_T1);
    test_decode(0xFAA0_F090, Encoding::UNDEFINED);
    test_decode(0xFAB0_F080, Encoding::CLZ_T1);
    test_decode(0xFA80_F0C0, Encoding::UNDEFINED);
}

#[test]
fn parallel_add_sub_rows() {
    test_decode(0xFA80_F000, Encoding::SADD8_T1);
    test_decode(0xFA90_F000, Encoding::SADD16_T1);
    test_decode(0xFAA0_F000, Encoding::SASX_T1);
    test_decode(0xFA80_F010, Encoding::QADD8_T1);
    test_decode(0xFA90_F010, Encoding::QADD16_T1);
    test_decode(0xFAA0_F010, Encoding::QASX_T1);
    test_decode(0xFA80_F020, Encoding::SHADD8_T1);
    test_decode(0xFA90_F020, Encoding::SHADD16_T1);
    test_decode(0xFAA0_F020, Encoding::SHASX_T1);
    test_decode(0xFA80_F040, Encoding::UADD8_T1);
    test_decode(0xFA90_F040, Encoding::UADD16_T1);
    test_decode(0xFAA0_F040, Encoding::UASX_T1);
    test_decode(0xFA80_F050, Encoding::UQADD8_T1);
    test_decode(0xFA80_F060, Encoding::UHADD8_T1);
    // the selector only spans the add/exchange row group
    test_decode(0xFAB0_F000, Encoding::UNDEFINED);
    test_decode(0xFA80_F030, Encoding::UNDEFINED);
    test_decode(0xFA80_F070, Encoding::UNDEFINED);
}

#[test]
fn multiply_rows() {
    test_decode(0xFB00_F000, Encoding::MUL_T2);
    test_decode(0xFB00_0000, Encoding::MLA_T1);
    test_decode(0xFB00_0010, Encoding::MLS_T1);
    test_decode(0xFB10_F000, Encoding::SMULBB_T1);
    test_decode(0xFB10_F010, Encoding::SMULBT_T1);
    test_decode(0xFB10_F020, Encoding::SMULTB_T1);
    test_decode(0xFB10_F030, Encoding::SMULTT_T1);
    test_decode(0xFB10_0000, Encoding::SMLABB_T1);
    test_decode(0xFB10_0020, Encoding::SMLATB_T1);
    test_decode(0xFB10_0030, Encoding::SMLATT_T1);
    test_decode(0xFB20_F000, Encoding::SMUAD_T1);
    test_decode(0xFB20_F010, Encoding::SMUADX_T1);
    test_decode(0xFB20_0000, Encoding::SMLAD_T1);
    test_decode(0xFB30_F000, Encoding::SMULWB_T1);
    test_decode(0xFB30_F010, Encoding::SMULWT_T1);
    test_decode(0xFB30_0000, Encoding::SMLAWB_T1);
    test_decode(0xFB40_F000, Encoding::SMUSD_T1);
    test_decode(0xFB40_0000, Encoding::SMLSD_T1);
    test_decode(0xFB50_F000, Encoding::SMMUL_T1);
    test_decode(0xFB50_F010, Encoding::SMMULR_T1);
    test_decode(0xFB50_0000, Encoding::SMMLA_T1);
    test_decode(0xFB60_0000, Encoding::SMMLS_T1);
    test_decode(0xFB60_0010, Encoding::SMMLSR_T1);
    test_decode(0xFB70_F000, Encoding::USAD8_T1);
    test_decode(0xFB70_0000, Encoding::USADA8_T1);
    // fixed zero bits and half-word selectors gate the table
    test_decode(0xFB00_0040, Encoding::UNDEFINED);
    test_decode(0xFB20_0020, Encoding::UNDEFINED);
}

#[test]
fn long_multiply_and_divide_rows() {
    test_decode(0xFB80_0000, Encoding::SMULL_T1);
    test_decode(0xFB90_F0F0, Encoding::SDIV_T1);
    test_decode(0xFBA0_0000, Encoding::UMULL_T1);
    test_decode(0xFBB0_F0F0, Encoding::UDIV_T1);
    test_decode(0xFBC0_0000, Encoding::SMLAL_T1);
    test_decode(0xFBC0_0080, Encoding::SMLALBB_T1);
    test_decode(0xFBC0_0090, Encoding::SMLALBT_T1);
    test_decode(0xFBC0_00A0, Encoding::SMLALTB_T1);
    test_decode(0xFBC0_00B0, Encoding::SMLALTT_T1);
    test_decode(0xFBC0_00C0, Encoding::SMLALD_T1);
    test_decode(0xFBC0_00D0, Encoding::SMLALDX_T1);
    test_decode(0xFBD0_00C0, Encoding::SMLSLD_T1);
    test_decode(0xFBD0_00D0, Encoding::SMLSLDX_T1);
    test_decode(0xFBE0_0000, Encoding::UMLAL_T1);
    test_decode(0xFBE0_0060, Encoding::UMAAL_T1);
    test_decode(0xFB80_0010, Encoding::UNDEFINED);
    test_decode(0xFBF0_0000, Encoding::UNDEFINED);
}

#[test]
fn store_single_rows() {
    test_decode(0xF800_0000, Encoding::STRB_REG_T2);
    test_decode(0xF800_0800, Encoding::STRB_IMM_T3);
    test_decode(0xF820_0000, Encoding::STRH_REG_T2);
    test_decode(0xF820_0800, Encoding::STRH_IMM_T3);
    test_decode(0xF840_0000, Encoding::STR_REG_T2);
    test_decode(0xF840_0800, Encoding::STR_IMM_T4);
    test_decode(0xF880_0000, Encoding::STRB_IMM_T2);
    test_decode(0xF8A0_0000, Encoding::STRH_IMM_T2);
    test_decode(0xF8C0_0000, Encoding::STR_IMM_T3);
    test_decode(0xF860_0000, Encoding::UNDEFINED);
}

#[test]
fn load_word_rows() {
    test_decode(0xF850_0000, Encoding::LDR_REG_T2);
    test_decode(0xF8D0_0000, Encoding::LDR_IMM_T3);
    test_decode(0xF85F_0000, Encoding::LDR_LIT_T2);
    test_decode(0xF850_0C00, Encoding::LDR_IMM_T4);
    test_decode(0xF850_0900, Encoding::LDR_IMM_T4);
    test_decode(0xF850_0E00, Encoding::LDRT_T1);
    test_decode(0xF850_0400, Encoding::UNDEFINED);
    test_decode(0xF950_0000, Encoding::UNDEFINED);
}

#[test]
fn load_halfword_rows() {
    test_decode(0xF830_0000, Encoding::LDRH_REG_T2);
    test_decode(0xF8B0_0000, Encoding::LDRH_IMM_T3);
    test_decode(0xF830_0900, Encoding::LDRH_IMM_T3);
    test_decode(0xF830_0C00, Encoding::LDRH_IMM_T3);
    test_decode(0xF830_0E00, Encoding::LDRHT_T1);
    test_decode(0xF83F_0000, Encoding::LDRH_LIT_T1);
    test_decode(0xF930_0000, Encoding::LDRSH_REG_T2);
    test_decode(0xF9B0_0000, Encoding::LDRSH_IMM_T1);
    test_decode(0xF930_0900, Encoding::LDRSH_IMM_T2);
    test_decode(0xF930_0E00, Encoding::LDRSHT_T1);
    test_decode(0xF9BF_0000, Encoding::LDRSH_LIT_T1);
}

#[test]
fn load_halfword_pc_destination_rows() {
    // a PC destination in the halfword space is mostly unallocated, with
    // two unpredictable sub-ranges
    test_decode(0xF83F_F000, Encoding::UNPREDICTABLE);
    test_decode(0xF93F_F000, Encoding::UNALLOCATED);
    test_decode(0xF8B0_F000, Encoding::UNALLOCATED);
    test_decode(0xF9B0_F000, Encoding::UNALLOCATED);
    test_decode(0xF830_F000, Encoding::UNALLOCATED);
    test_decode(0xF830_F300, Encoding::UNALLOCATED);
    test_decode(0xF830_F900, Encoding::UNPREDICTABLE);
    test_decode(0xF830_FE00, Encoding::UNPREDICTABLE);
    test_decode(0xF830_F400, Encoding::UNDEFINED);
}

#[test]
fn load_byte_rows() {
    test_decode(0xF810_0000, Encoding::LDRB_REG_T2);
    test_decode(0xF890_0000, Encoding::LDRB_IMM_T2);
    test_decode(0xF810_0900, Encoding::LDRB_IMM_T3);
    test_decode(0xF810_0C00, Encoding::LDRB_IMM_T3);
    test_decode(0xF810_0E00, Encoding::LDRBT_T1);
    test_decode(0xF81F_0000, Encoding::LDRB_LIT_T1);
    test_decode(0xF910_0000, Encoding::LDRSB_REG_T2);
    test_decode(0xF990_0000, Encoding::LDRSB_IMM_T1);
    test_decode(0xF910_0900, Encoding::LDRSB_IMM_T2);
    test_decode(0xF910_0E00, Encoding::LDRSBT_T1);
    test_decode(0xF99F_0000, Encoding::LDRSB_LIT_T1);
}

#[test]
fn preload_rows() {
    // a PC destination selects the preload hint space
    test_decode(0xF810_F000, Encoding::PLD_REG_T1);
    test_decode(0xF890_F000, Encoding::PLD_IMM_T1);
    test_decode(0xF810_FC00, Encoding::PLD_IMM_T2);
    test_decode(0xF81F_F000, Encoding::PLD_LIT_T1);
    test_decode(0xF910_F000, Encoding::PLI_REG_T1);
    test_decode(0xF910_FC00, Encoding::PLD_IMM_LIT_T2);
    test_decode(0xF990_F000, Encoding::PLI_IMM_LIT_T1);
    test_decode(0xF91F_F000, Encoding::PLI_IMM_LIT_T3);
    test_decode(0xF810_F900, Encoding::UNPREDICTABLE);
    test_decode(0xF810_FE00, Encoding::UNPREDICTABLE);
    test_decode(0xF910_F900, Encoding::UNPREDICTABLE);
    test_decode(0xF810_F400, Encoding::UNDEFINED);
}

#[test]
fn narrow_space_is_undefined() {
    // the remaining primary group belongs to the 16-bit encodings
    test_decode(0x0000_0000, Encoding::UNDEFINED);
    test_decode(0x0000_4770, Encoding::UNDEFINED);
    test_decode(0x47FF_FFFF, Encoding::UNDEFINED);
}
