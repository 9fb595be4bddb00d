// Copyright (C) Microsoft Corporation. All rights reserved.

use super::*;

/// RSA-2048 key pair, public exponent 65537.
pub(crate) const RSA_2048: AsymmetricKeyTestVector = AsymmetricKeyTestVector {
    algorithm: AsymmetricKeyAlgorithm::Rsa,
    pkcs8: &[
        0x30, 0x82, 0x04, 0xBD, 0x02, 0x01, 0x00, 0x30, 0x0D, 0x06, 0x09, 0x2A,
        0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x01, 0x05, 0x00, 0x04, 0x82,
        0x04, 0xA7, 0x30, 0x82, 0x04, 0xA3, 0x02, 0x01, 0x00, 0x02, 0x82, 0x01,
        0x01, 0x00, 0xA4, 0xD9, 0xA6, 0xA7, 0x1E, 0x84, 0x15, 0x83, 0x3F, 0x55,
        0xC8, 0x5B, 0x0F, 0xDB, 0x59, 0xBF, 0x7C, 0x50, 0x94, 0x39, 0x24, 0x52,
        0xDA, 0x47, 0xD3, 0x44, 0xF2, 0x4F, 0x6B, 0x54, 0x49, 0x1F, 0xD9, 0x4E,
        0x7B, 0x10, 0xFF, 0x2A, 0x23, 0x50, 0xD5, 0x4E, 0x93, 0xC5, 0x1E, 0x86,
        0x2E, 0x2F, 0x1A, 0x64, 0x4B, 0x6D, 0x78, 0x7C, 0xB7, 0x48, 0xC2, 0xA6,
        0x9F, 0x64, 0x25, 0x5A, 0x8F, 0x28, 0x7D, 0x23, 0xF2, 0x73, 0x11, 0xD9,
        0x56, 0x0E, 0x87, 0x79, 0xC7, 0xA5, 0x8F, 0xA4, 0x34, 0x44, 0x9F, 0xB3,
        0x22, 0xED, 0x03, 0x6E, 0x95, 0xF4, 0x94, 0x8A, 0x4B, 0x3B, 0x4D, 0xB2,
        0x7D, 0x41, 0xBD, 0x76, 0x23, 0xD6, 0x93, 0xDB, 0xD4, 0x6E, 0x0D, 0x3E,
        0x88, 0x94, 0x38, 0x12, 0x2F, 0x63, 0x3C, 0xF6, 0x0D, 0xCE, 0x38, 0x2B,
        0x97, 0x4C, 0xAB, 0x09, 0x6A, 0x3D, 0x13, 0xBE, 0xCC, 0xED, 0xDE, 0xB5,
        0xC5, 0x30, 0xB2, 0x30, 0x80, 0xAF, 0xDD, 0x65, 0xA4, 0x15, 0xD9, 0x70,
        0xF2, 0xC5, 0x51, 0x72, 0x1F, 0xCF, 0x69, 0x94, 0x98, 0x95, 0x0B, 0x0D,
        0x7F, 0xE9, 0x9A, 0x87, 0x7C, 0x3E, 0x8C, 0x4D, 0x46, 0x94, 0x98, 0xEC,
        0x28, 0x33, 0xE4, 0x67, 0xD3, 0x84, 0xA3, 0x7E, 0xB3, 0xCD, 0x30, 0x78,
        0xA2, 0x5C, 0xF2, 0x4E, 0xED, 0x22, 0x89, 0xD8, 0x65, 0xD3, 0x20, 0xE2,
        0x6B, 0x99, 0xDF, 0xE9, 0x69, 0xDD, 0xB7, 0xF6, 0x9C, 0x15, 0xAC, 0x70,
        0x71, 0x1F, 0xA0, 0x15, 0xCE, 0xEA, 0x2A, 0x3B, 0xC4, 0xDC, 0x00, 0xCF,
        0xA1, 0xB1, 0x65, 0xE9, 0x5F, 0x0C, 0xA7, 0x42, 0x42, 0x20, 0x28, 0x2B,
        0x97, 0x3A, 0xC4, 0xE7, 0xAD, 0x6D, 0xAC, 0x24, 0x97, 0x96, 0xC3, 0xCA,
        0x56, 0x8E, 0xE2, 0x3E, 0x8A, 0xB8, 0xD0, 0x1C, 0xF1, 0x48, 0xE8, 0xAB,
        0xD6, 0x38, 0xC2, 0x58, 0x6F, 0xB5, 0x02, 0x03, 0x01, 0x00, 0x01, 0x02,
        0x82, 0x01, 0x00, 0x03, 0xE6, 0x6C, 0x55, 0x6E, 0xD8, 0xE4, 0x23, 0x67,
        0x47, 0xB1, 0xC6, 0x49, 0xC1, 0x40, 0x45, 0xD1, 0xFC, 0x9C, 0x0D, 0x20,
        0x09, 0x5F, 0xC5, 0xAC, 0x3F, 0x68, 0xD6, 0x2D, 0x2D, 0x60, 0xCF, 0x82,
        0x96, 0x23, 0x3E, 0x3B, 0x33, 0x35, 0x83, 0xAF, 0x90, 0x3C, 0xD9, 0xC0,
        0x87, 0x9F, 0x27, 0x19, 0x22, 0x3F, 0x50, 0x97, 0x35, 0xA8, 0x26, 0x6E,
        0x08, 0x80, 0x23, 0xDF, 0xE8, 0x5D, 0x13, 0xB1, 0xA6, 0x3C, 0x91, 0xB1,
        0x5D, 0xE9, 0x75, 0xCD, 0x89, 0xB9, 0x89, 0xF6, 0xB4, 0x85, 0x52, 0x0C,
        0x4F, 0x32, 0x27, 0xD6, 0x59, 0x72, 0xED, 0xC6, 0xE7, 0xE0, 0xB0, 0xC5,
        0xFD, 0x4F, 0x8E, 0x53, 0x1B, 0xAC, 0xEC, 0x62, 0x32, 0x24, 0xBB, 0xF7,
        0xCF, 0x3F, 0x6E, 0xF6, 0x46, 0xA3, 0xDD, 0x5E, 0xAF, 0x59, 0x93, 0x43,
        0xEB, 0xF0, 0x17, 0xED, 0xC1, 0xFA, 0xC3, 0xF8, 0x28, 0x1E, 0xF4, 0x06,
        0x04, 0x98, 0xB7, 0xA5, 0x04, 0x29, 0x2A, 0xC3, 0x5F, 0xC5, 0x6B, 0xEB,
        0x60, 0xC0, 0xB5, 0x24, 0x9A, 0x02, 0x2E, 0x71, 0x73, 0x27, 0x99, 0xA8,
        0x64, 0xAD, 0xAB, 0x89, 0xEC, 0x00, 0x1A, 0x1B, 0x1B, 0x9C, 0x2F, 0x1B,
        0xA3, 0xCC, 0x0C, 0x95, 0x53, 0x5B, 0x26, 0xCB, 0xD9, 0x12, 0x81, 0x1F,
        0x67, 0xA3, 0xB7, 0x5C, 0x4C, 0xB2, 0x72, 0x3C, 0x1D, 0x75, 0xDB, 0xC4,
        0x24, 0xC5, 0x14, 0x88, 0x96, 0xC9, 0x0B, 0x1E, 0x2E, 0x49, 0x28, 0xB5,
        0x25, 0x7D, 0x8E, 0x5C, 0xA2, 0x48, 0x5C, 0x84, 0xED, 0x06, 0x5D, 0x8D,
        0x5A, 0xC9, 0xB2, 0xB6, 0xD9, 0xA3, 0xC0, 0xF2, 0x2D, 0x47, 0x92, 0xDB,
        0x1B, 0x17, 0x6C, 0x9B, 0x40, 0x60, 0x09, 0x40, 0xE3, 0x5D, 0x00, 0x19,
        0xB4, 0x43, 0x7E, 0xB8, 0xB2, 0x6E, 0x31, 0x24, 0xDB, 0x5E, 0x22, 0x05,
        0x4A, 0x22, 0x47, 0x77, 0x6F, 0x98, 0x1F, 0x02, 0x81, 0x81, 0x00, 0xD0,
        0xBE, 0x29, 0x2E, 0x04, 0xDB, 0xA7, 0x44, 0xDC, 0xB3, 0xA9, 0xEB, 0xAF,
        0xD6, 0x4E, 0x47, 0x02, 0xDF, 0x01, 0xCB, 0x73, 0x0B, 0xAD, 0xB8, 0xDD,
        0x47, 0xEB, 0x5B, 0xF4, 0x1A, 0xA1, 0x10, 0x27, 0xAF, 0x52, 0x15, 0x41,
        0x62, 0x49, 0xA3, 0xA1, 0x5A, 0xF3, 0xC0, 0xCD, 0x5A, 0x42, 0x3E, 0x29,
        0xC0, 0x75, 0xFB, 0x75, 0x10, 0x53, 0x94, 0x32, 0x44, 0x95, 0xBE, 0x10,
        0xC1, 0x8F, 0xA0, 0xD4, 0x2C, 0x0E, 0x21, 0xCF, 0x09, 0x8F, 0xA5, 0xEB,
        0x61, 0xA7, 0xCB, 0xED, 0x4A, 0xB4, 0xBB, 0x63, 0x39, 0xD7, 0xA9, 0xAD,
        0x75, 0x08, 0xB3, 0xB3, 0x5B, 0x57, 0x62, 0x21, 0x5B, 0x76, 0x28, 0xC5,
        0x9E, 0x33, 0xE0, 0xEA, 0xA5, 0xDE, 0x72, 0xB2, 0x79, 0x71, 0x40, 0x80,
        0x4C, 0xCD, 0xD0, 0x60, 0xF8, 0xAE, 0xDF, 0x24, 0xFB, 0xDA, 0x2D, 0x38,
        0x40, 0x6B, 0xB5, 0xC0, 0x1E, 0xC1, 0x0B, 0x02, 0x81, 0x81, 0x00, 0xCA,
        0x2B, 0xA9, 0x82, 0x6E, 0x9F, 0x5D, 0x84, 0x57, 0x0A, 0x82, 0x43, 0xC9,
        0x90, 0xB8, 0xD1, 0xA2, 0xAC, 0x15, 0x9A, 0x5A, 0xD2, 0x61, 0xD9, 0xF3,
        0x6E, 0xE3, 0x5B, 0x46, 0xE7, 0x5C, 0xC6, 0x02, 0x96, 0xF8, 0xEB, 0x5A,
        0x07, 0xE5, 0xEE, 0x3A, 0xA3, 0xC9, 0x5E, 0x21, 0x49, 0xC8, 0x4A, 0x70,
        0x58, 0x64, 0x05, 0xAF, 0xC2, 0x11, 0x5A, 0x67, 0xCE, 0xED, 0x05, 0x75,
        0xBF, 0x14, 0x0F, 0x39, 0x96, 0x49, 0xD5, 0xF5, 0xBC, 0xDD, 0x0D, 0x37,
        0x7D, 0x75, 0x3A, 0x92, 0x13, 0xFF, 0x8C, 0xEC, 0x8F, 0xF4, 0x33, 0x71,
        0xEC, 0xDF, 0xE7, 0x90, 0xA6, 0x33, 0x7C, 0xF6, 0xF6, 0x9B, 0x12, 0x6E,
        0xDC, 0x8D, 0x6B, 0xBC, 0xDE, 0xF1, 0xA1, 0xBF, 0x33, 0x76, 0xFF, 0x8C,
        0x53, 0x50, 0xF0, 0xAA, 0x86, 0x5A, 0x10, 0x25, 0x63, 0xCB, 0xAC, 0x16,
        0xC2, 0xD4, 0x54, 0x54, 0x85, 0x8A, 0x3F, 0x02, 0x81, 0x80, 0x58, 0x0B,
        0xCD, 0x9C, 0xCE, 0x89, 0xC3, 0xBD, 0x05, 0x06, 0x77, 0x26, 0xA5, 0x6D,
        0x54, 0x69, 0x19, 0x69, 0xEC, 0xFC, 0xDE, 0x92, 0xCF, 0x7C, 0xC9, 0x41,
        0x3B, 0xA1, 0xF6, 0x8D, 0x80, 0xE0, 0x2A, 0x8D, 0x05, 0xA7, 0x57, 0x83,
        0xD8, 0xA1, 0xBF, 0x3E, 0x78, 0xD0, 0x1B, 0x0D, 0xF6, 0x20, 0xF8, 0x45,
        0x68, 0xBE, 0x5E, 0xBB, 0x3B, 0x35, 0xA8, 0x1A, 0x4B, 0xBA, 0xF6, 0xA0,
        0x5E, 0x2F, 0xAD, 0x2E, 0xC3, 0xEB, 0x38, 0xC3, 0xC4, 0xA6, 0x6C, 0x69,
        0x2D, 0x78, 0x93, 0xA7, 0x4E, 0x22, 0x38, 0x11, 0x3E, 0xC9, 0x20, 0x13,
        0xDC, 0x4E, 0xC7, 0xD9, 0x40, 0x3B, 0x70, 0xEC, 0x7E, 0x23, 0x66, 0x6F,
        0x7B, 0x5C, 0x64, 0x3D, 0x00, 0x5E, 0x0A, 0xAF, 0xB4, 0xB8, 0x4B, 0x25,
        0x9A, 0x2E, 0x49, 0xA8, 0xBB, 0x41, 0xFD, 0xFC, 0x89, 0x23, 0x47, 0xB5,
        0xCC, 0x78, 0xC6, 0x07, 0x72, 0xCF, 0x02, 0x81, 0x80, 0x7B, 0xD0, 0xDB,
        0xC2, 0xB7, 0x0F, 0x41, 0x0D, 0xD0, 0xE4, 0xED, 0xBC, 0xA8, 0x50, 0xCA,
        0xF0, 0x10, 0xC9, 0x85, 0x7D, 0x80, 0x0C, 0x02, 0xC3, 0xA1, 0xB4, 0x12,
        0xE8, 0x0E, 0xF7, 0x99, 0x38, 0xE7, 0xD3, 0x20, 0x65, 0xBB, 0x40, 0xC5,
        0x0F, 0xEE, 0xB7, 0xEA, 0x96, 0x8C, 0x9A, 0x8C, 0x61, 0x12, 0x86, 0xFF,
        0xD2, 0xFF, 0xBE, 0x42, 0x34, 0x75, 0x09, 0x24, 0xDE, 0x48, 0x2B, 0x9B,
        0x14, 0x6B, 0xF7, 0x60, 0x06, 0xFA, 0xB6, 0x0D, 0x47, 0x8F, 0xE9, 0x75,
        0x07, 0x46, 0xF9, 0x9A, 0x73, 0xEB, 0x59, 0x8A, 0x7C, 0x8B, 0x54, 0x40,
        0x18, 0xA8, 0xDD, 0x31, 0x01, 0x62, 0x9A, 0xCB, 0x84, 0x31, 0x83, 0x3F,
        0xD5, 0x70, 0xD9, 0xB5, 0x70, 0x93, 0x11, 0xE8, 0xDA, 0x3F, 0x4D, 0xB3,
        0x6F, 0x81, 0x70, 0x40, 0xEE, 0x4C, 0x87, 0xDE, 0xEF, 0xE9, 0x0C, 0xAF,
        0x4F, 0x6A, 0x68, 0x52, 0xAF, 0x02, 0x81, 0x81, 0x00, 0xBB, 0x82, 0x14,
        0xA2, 0x5D, 0xD3, 0x7D, 0xD6, 0x2F, 0x9B, 0x3A, 0x56, 0xA3, 0xF9, 0x15,
        0x3C, 0xC5, 0x61, 0x3D, 0x7B, 0x78, 0xA9, 0xE0, 0x75, 0xE9, 0x1E, 0x8E,
        0x0B, 0xE1, 0x24, 0xBB, 0x96, 0x4B, 0x47, 0x74, 0xA6, 0xB6, 0xF9, 0xE1,
        0xD2, 0x0C, 0xA9, 0x0C, 0xA8, 0xE7, 0x85, 0x82, 0x80, 0x24, 0xC4, 0x50,
        0x6F, 0xA1, 0xEC, 0xC0, 0x74, 0x47, 0x63, 0xA2, 0x77, 0xB2, 0x24, 0x62,
        0xCF, 0xFE, 0x4E, 0xD5, 0xB6, 0x64, 0x04, 0x59, 0x69, 0xCB, 0xA0, 0x08,
        0x78, 0x60, 0x22, 0x92, 0x56, 0xCF, 0xDD, 0x10, 0x08, 0xEF, 0x52, 0xE2,
        0x76, 0x6B, 0x8B, 0xFF, 0xBA, 0xC5, 0x23, 0xF9, 0x4D, 0x6A, 0x16, 0x51,
        0x0F, 0x4A, 0xC3, 0x72, 0x9A, 0x29, 0x4F, 0x98, 0xCB, 0x8D, 0xC3, 0xDA,
        0x65, 0x6D, 0xC6, 0xCE, 0xD8, 0x3D, 0xEC, 0xBB, 0xF5, 0xEC, 0x94, 0xD9,
        0xF1, 0x11, 0x78, 0xEA, 0x3D,
    ],
    spki: &[
        0x30, 0x82, 0x01, 0x22, 0x30, 0x0D, 0x06, 0x09, 0x2A, 0x86, 0x48, 0x86,
        0xF7, 0x0D, 0x01, 0x01, 0x01, 0x05, 0x00, 0x03, 0x82, 0x01, 0x0F, 0x00,
        0x30, 0x82, 0x01, 0x0A, 0x02, 0x82, 0x01, 0x01, 0x00, 0xA4, 0xD9, 0xA6,
        0xA7, 0x1E, 0x84, 0x15, 0x83, 0x3F, 0x55, 0xC8, 0x5B, 0x0F, 0xDB, 0x59,
        0xBF, 0x7C, 0x50, 0x94, 0x39, 0x24, 0x52, 0xDA, 0x47, 0xD3, 0x44, 0xF2,
        0x4F, 0x6B, 0x54, 0x49, 0x1F, 0xD9, 0x4E, 0x7B, 0x10, 0xFF, 0x2A, 0x23,
        0x50, 0xD5, 0x4E, 0x93, 0xC5, 0x1E, 0x86, 0x2E, 0x2F, 0x1A, 0x64, 0x4B,
        0x6D, 0x78, 0x7C, 0xB7, 0x48, 0xC2, 0xA6, 0x9F, 0x64, 0x25, 0x5A, 0x8F,
        0x28, 0x7D, 0x23, 0xF2, 0x73, 0x11, 0xD9, 0x56, 0x0E, 0x87, 0x79, 0xC7,
        0xA5, 0x8F, 0xA4, 0x34, 0x44, 0x9F, 0xB3, 0x22, 0xED, 0x03, 0x6E, 0x95,
        0xF4, 0x94, 0x8A, 0x4B, 0x3B, 0x4D, 0xB2, 0x7D, 0x41, 0xBD, 0x76, 0x23,
        0xD6, 0x93, 0xDB, 0xD4, 0x6E, 0x0D, 0x3E, 0x88, 0x94, 0x38, 0x12, 0x2F,
        0x63, 0x3C, 0xF6, 0x0D, 0xCE, 0x38, 0x2B, 0x97, 0x4C, 0xAB, 0x09, 0x6A,
        0x3D, 0x13, 0xBE, 0xCC, 0xED, 0xDE, 0xB5, 0xC5, 0x30, 0xB2, 0x30, 0x80,
        0xAF, 0xDD, 0x65, 0xA4, 0x15, 0xD9, 0x70, 0xF2, 0xC5, 0x51, 0x72, 0x1F,
        0xCF, 0x69, 0x94, 0x98, 0x95, 0x0B, 0x0D, 0x7F, 0xE9, 0x9A, 0x87, 0x7C,
        0x3E, 0x8C, 0x4D, 0x46, 0x94, 0x98, 0xEC, 0x28, 0x33, 0xE4, 0x67, 0xD3,
        0x84, 0xA3, 0x7E, 0xB3, 0xCD, 0x30, 0x78, 0xA2, 0x5C, 0xF2, 0x4E, 0xED,
        0x22, 0x89, 0xD8, 0x65, 0xD3, 0x20, 0xE2, 0x6B, 0x99, 0xDF, 0xE9, 0x69,
        0xDD, 0xB7, 0xF6, 0x9C, 0x15, 0xAC, 0x70, 0x71, 0x1F, 0xA0, 0x15, 0xCE,
        0xEA, 0x2A, 0x3B, 0xC4, 0xDC, 0x00, 0xCF, 0xA1, 0xB1, 0x65, 0xE9, 0x5F,
        0x0C, 0xA7, 0x42, 0x42, 0x20, 0x28, 0x2B, 0x97, 0x3A, 0xC4, 0xE7, 0xAD,
        0x6D, 0xAC, 0x24, 0x97, 0x96, 0xC3, 0xCA, 0x56, 0x8E, 0xE2, 0x3E, 0x8A,
        0xB8, 0xD0, 0x1C, 0xF1, 0x48, 0xE8, 0xAB, 0xD6, 0x38, 0xC2, 0x58, 0x6F,
        0xB5, 0x02, 0x03, 0x01, 0x00, 0x01,
    ],
    private_jwk: r#"{"kty": "RSA", "n": "pNmmpx6EFYM_VchbD9tZv3xQlDkkUtpH00TyT2tUSR_ZTnsQ_yojUNVOk8Uehi4vGmRLbXh8t0jCpp9kJVqPKH0j8nMR2VYOh3nHpY-kNESfsyLtA26V9JSKSztNsn1BvXYj1pPb1G4NPoiUOBIvYzz2Dc44K5dMqwlqPRO-zO3etcUwsjCAr91lpBXZcPLFUXIfz2mUmJULDX_pmod8PoxNRpSY7Cgz5GfThKN-s80weKJc8k7tIonYZdMg4muZ3-lp3bf2nBWscHEfoBXO6io7xNwAz6GxZelfDKdCQiAoK5c6xOetbawkl5bDylaO4j6KuNAc8Ujoq9Y4wlhvtQ", "e": "AQAB", "d": "A-ZsVW7Y5CNnR7HGScFARdH8nA0gCV_FrD9o1i0tYM-CliM-OzM1g6-QPNnAh58nGSI_UJc1qCZuCIAj3-hdE7GmPJGxXel1zYm5ifa0hVIMTzIn1lly7cbn4LDF_U-OUxus7GIyJLv3zz9u9kaj3V6vWZND6_AX7cH6w_goHvQGBJi3pQQpKsNfxWvrYMC1JJoCLnFzJ5moZK2riewAGhsbnC8bo8wMlVNbJsvZEoEfZ6O3XEyycjwdddvEJMUUiJbJCx4uSSi1JX2OXKJIXITtBl2NWsmyttmjwPItR5LbGxdsm0BgCUDjXQAZtEN-uLJuMSTbXiIFSiJHd2-YHw", "p": "0L4pLgTbp0Tcs6nrr9ZORwLfActzC6243UfrW_QaoRAnr1IVQWJJo6Fa88DNWkI-KcB1-3UQU5QyRJW-EMGPoNQsDiHPCY-l62Gny-1KtLtjOdeprXUIs7NbV2IhW3YoxZ4z4Oql3nKyeXFAgEzN0GD4rt8k-9otOEBrtcAewQs", "q": "yiupgm6fXYRXCoJDyZC40aKsFZpa0mHZ827jW0bnXMYClvjrWgfl7jqjyV4hSchKcFhkBa_CEVpnzu0Fdb8UDzmWSdX1vN0NN311OpIT_4zsj_Qzcezf55CmM3z29psSbtyNa7ze8aG_M3b_jFNQ8KqGWhAlY8usFsLUVFSFij8", "dp": "WAvNnM6Jw70FBncmpW1UaRlp7Pzeks98yUE7ofaNgOAqjQWnV4PYob8-eNAbDfYg-EVovl67OzWoGku69qBeL60uw-s4w8SmbGkteJOnTiI4ET7JIBPcTsfZQDtw7H4jZm97XGQ9AF4Kr7S4SyWaLkmou0H9_IkjR7XMeMYHcs8", "dq": "e9DbwrcPQQ3Q5O28qFDK8BDJhX2ADALDobQS6A73mTjn0yBlu0DFD-636paMmoxhEob_0v--QjR1CSTeSCubFGv3YAb6tg1Hj-l1B0b5mnPrWYp8i1RAGKjdMQFimsuEMYM_1XDZtXCTEejaP02zb4FwQO5Mh97v6QyvT2poUq8", "qi": "u4IUol3TfdYvmzpWo_kVPMVhPXt4qeB16R6OC-Eku5ZLR3Smtvnh0gypDKjnhYKAJMRQb6HswHRHY6J3siRiz_5O1bZkBFlpy6AIeGAiklbP3RAI71LidmuL_7rFI_lNahZRD0rDcpopT5jLjcPaZW3Gztg97Lv17JTZ8RF46j0"}"#,
    public_jwk: r#"{"kty": "RSA", "n": "pNmmpx6EFYM_VchbD9tZv3xQlDkkUtpH00TyT2tUSR_ZTnsQ_yojUNVOk8Uehi4vGmRLbXh8t0jCpp9kJVqPKH0j8nMR2VYOh3nHpY-kNESfsyLtA26V9JSKSztNsn1BvXYj1pPb1G4NPoiUOBIvYzz2Dc44K5dMqwlqPRO-zO3etcUwsjCAr91lpBXZcPLFUXIfz2mUmJULDX_pmod8PoxNRpSY7Cgz5GfThKN-s80weKJc8k7tIonYZdMg4muZ3-lp3bf2nBWscHEfoBXO6io7xNwAz6GxZelfDKdCQiAoK5c6xOetbawkl5bDylaO4j6KuNAc8Ujoq9Y4wlhvtQ", "e": "AQAB"}"#,
};

/// NIST P-256 key pair. The PKCS8 form carries the public point.
pub(crate) const EC_P256: AsymmetricKeyTestVector = AsymmetricKeyTestVector {
    algorithm: AsymmetricKeyAlgorithm::Ec(EcCurve::P256),
    pkcs8: &[
        0x30, 0x81, 0x87, 0x02, 0x01, 0x00, 0x30, 0x13, 0x06, 0x07, 0x2A, 0x86,
        0x48, 0xCE, 0x3D, 0x02, 0x01, 0x06, 0x08, 0x2A, 0x86, 0x48, 0xCE, 0x3D,
        0x03, 0x01, 0x07, 0x04, 0x6D, 0x30, 0x6B, 0x02, 0x01, 0x01, 0x04, 0x20,
        0xB3, 0xD7, 0xD3, 0x97, 0x61, 0x04, 0xC6, 0x5D, 0xC5, 0x6B, 0x49, 0xF9,
        0x80, 0xC6, 0x1F, 0x53, 0xD7, 0xFC, 0x50, 0x1E, 0x49, 0x18, 0xC6, 0x37,
        0xE3, 0x3F, 0xA6, 0xE0, 0xA0, 0xF3, 0xD2, 0xC0, 0xA1, 0x44, 0x03, 0x42,
        0x00, 0x04, 0xA6, 0x9F, 0x3A, 0xB4, 0xA8, 0xEA, 0x37, 0xE0, 0xB1, 0xBD,
        0xD4, 0x9C, 0x5E, 0x94, 0x08, 0x29, 0x42, 0x41, 0x91, 0x5F, 0x09, 0x45,
        0x7D, 0x0F, 0xD5, 0x46, 0x5F, 0xA2, 0xC2, 0x26, 0xAC, 0x2A, 0x1E, 0x1E,
        0x70, 0x14, 0x27, 0xEA, 0x38, 0x1A, 0x14, 0x18, 0x2C, 0x3B, 0xE7, 0x2C,
        0x5D, 0x53, 0xB4, 0x70, 0x3D, 0x8A, 0xA0, 0x32, 0x58, 0x70, 0x38, 0xC5,
        0x99, 0x7A, 0x7F, 0xF4, 0xC0, 0x98,
    ],
    spki: &[
        0x30, 0x59, 0x30, 0x13, 0x06, 0x07, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x02,
        0x01, 0x06, 0x08, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x03, 0x01, 0x07, 0x03,
        0x42, 0x00, 0x04, 0xA6, 0x9F, 0x3A, 0xB4, 0xA8, 0xEA, 0x37, 0xE0, 0xB1,
        0xBD, 0xD4, 0x9C, 0x5E, 0x94, 0x08, 0x29, 0x42, 0x41, 0x91, 0x5F, 0x09,
        0x45, 0x7D, 0x0F, 0xD5, 0x46, 0x5F, 0xA2, 0xC2, 0x26, 0xAC, 0x2A, 0x1E,
        0x1E, 0x70, 0x14, 0x27, 0xEA, 0x38, 0x1A, 0x14, 0x18, 0x2C, 0x3B, 0xE7,
        0x2C, 0x5D, 0x53, 0xB4, 0x70, 0x3D, 0x8A, 0xA0, 0x32, 0x58, 0x70, 0x38,
        0xC5, 0x99, 0x7A, 0x7F, 0xF4, 0xC0, 0x98,
    ],
    private_jwk: r#"{"kty": "EC", "crv": "P-256", "x": "pp86tKjqN-CxvdScXpQIKUJBkV8JRX0P1UZfosImrCo", "y": "Hh5wFCfqOBoUGCw75yxdU7RwPYqgMlhwOMWZen_0wJg", "d": "s9fTl2EExl3Fa0n5gMYfU9f8UB5JGMY34z-m4KDz0sA"}"#,
    public_jwk: r#"{"kty": "EC", "crv": "P-256", "x": "pp86tKjqN-CxvdScXpQIKUJBkV8JRX0P1UZfosImrCo", "y": "Hh5wFCfqOBoUGCw75yxdU7RwPYqgMlhwOMWZen_0wJg"}"#,
};

/// Ed25519 key pair. The PKCS8 form is version 1 and omits the public key.
pub(crate) const ED25519: AsymmetricKeyTestVector = AsymmetricKeyTestVector {
    algorithm: AsymmetricKeyAlgorithm::Ed25519,
    pkcs8: &[
        0x30, 0x2E, 0x02, 0x01, 0x00, 0x30, 0x05, 0x06, 0x03, 0x2B, 0x65, 0x70,
        0x04, 0x22, 0x04, 0x20, 0x73, 0xE1, 0xBB, 0x46, 0x09, 0x4B, 0xB9, 0x4D,
        0x52, 0xE0, 0xA6, 0x7C, 0x83, 0xC3, 0xB7, 0x0D, 0x34, 0x03, 0xB4, 0x9C,
        0x7C, 0xCF, 0x3D, 0x68, 0x57, 0x05, 0xB9, 0x63, 0xD8, 0x21, 0xC3, 0x32,
    ],
    spki: &[
        0x30, 0x2A, 0x30, 0x05, 0x06, 0x03, 0x2B, 0x65, 0x70, 0x03, 0x21, 0x00,
        0xB0, 0x51, 0xDD, 0x75, 0xFF, 0x91, 0x0B, 0x42, 0x35, 0x2C, 0x70, 0x18,
        0xB4, 0xFF, 0x08, 0x59, 0xA1, 0xBE, 0x28, 0x8D, 0x9C, 0xBD, 0x58, 0x75,
        0xE0, 0x6B, 0xCA, 0xCB, 0x7F, 0xA2, 0x20, 0xC1,
    ],
    private_jwk: r#"{"kty": "OKP", "crv": "Ed25519", "x": "sFHddf-RC0I1LHAYtP8IWaG-KI2cvVh14GvKy3-iIME", "d": "c-G7RglLuU1S4KZ8g8O3DTQDtJx8zz1oVwW5Y9ghwzI"}"#,
    public_jwk: r#"{"kty": "OKP", "crv": "Ed25519", "x": "sFHddf-RC0I1LHAYtP8IWaG-KI2cvVh14GvKy3-iIME"}"#,
};
