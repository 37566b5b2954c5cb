//! Canonical Huffman code table (RFC 7541 Appendix B).
//!
//! One codeword per byte value plus the end-of-string symbol. The table is a
//! plain `static`: it is fixed at compile time and shared by every thread.

/// A Huffman codeword, right-aligned in `bits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codeword {
    /// Code bits; only the low `nbits` bits are significant.
    pub bits: u32,
    /// Code length in bits (5..=30 for the HPACK table).
    pub nbits: u8,
}

const fn cw(bits: u32, nbits: u8) -> Codeword {
    Codeword { bits, nbits }
}

/// Symbol index of the end-of-string marker.
pub(crate) const EOS_SYMBOL: usize = 256;

/// The end-of-string codeword. Its leading bits form the padding pattern.
pub const EOS: Codeword = cw(0x3fffffff, 30);

/// Indexed by byte value, with EOS at [`EOS_SYMBOL`].
static CODEWORDS: [Codeword; 257] = [
    cw(0x1ff8, 13), // 0
    cw(0x7fffd8, 23), // 1
    cw(0xfffffe2, 28), // 2
    cw(0xfffffe3, 28), // 3
    cw(0xfffffe4, 28), // 4
    cw(0xfffffe5, 28), // 5
    cw(0xfffffe6, 28), // 6
    cw(0xfffffe7, 28), // 7
    cw(0xfffffe8, 28), // 8
    cw(0xffffea, 24), // 9
    cw(0x3ffffffc, 30), // 10
    cw(0xfffffe9, 28), // 11
    cw(0xfffffea, 28), // 12
    cw(0x3ffffffd, 30), // 13
    cw(0xfffffeb, 28), // 14
    cw(0xfffffec, 28), // 15
    cw(0xfffffed, 28), // 16
    cw(0xfffffee, 28), // 17
    cw(0xfffffef, 28), // 18
    cw(0xffffff0, 28), // 19
    cw(0xffffff1, 28), // 20
    cw(0xffffff2, 28), // 21
    cw(0x3ffffffe, 30), // 22
    cw(0xffffff3, 28), // 23
    cw(0xffffff4, 28), // 24
    cw(0xffffff5, 28), // 25
    cw(0xffffff6, 28), // 26
    cw(0xffffff7, 28), // 27
    cw(0xffffff8, 28), // 28
    cw(0xffffff9, 28), // 29
    cw(0xffffffa, 28), // 30
    cw(0xffffffb, 28), // 31
    cw(0x14, 6), // 32 ' '
    cw(0x3f8, 10), // 33 '!'
    cw(0x3f9, 10), // 34 '"'
    cw(0xffa, 12), // 35 '#'
    cw(0x1ff9, 13), // 36 '$'
    cw(0x15, 6), // 37 '%'
    cw(0xf8, 8), // 38 '&'
    cw(0x7fa, 11), // 39 '\''
    cw(0x3fa, 10), // 40 '('
    cw(0x3fb, 10), // 41 ')'
    cw(0xf9, 8), // 42 '*'
    cw(0x7fb, 11), // 43 '+'
    cw(0xfa, 8), // 44 ','
    cw(0x16, 6), // 45 '-'
    cw(0x17, 6), // 46 '.'
    cw(0x18, 6), // 47 '/'
    cw(0x0, 5), // 48 '0'
    cw(0x1, 5), // 49 '1'
    cw(0x2, 5), // 50 '2'
    cw(0x19, 6), // 51 '3'
    cw(0x1a, 6), // 52 '4'
    cw(0x1b, 6), // 53 '5'
    cw(0x1c, 6), // 54 '6'
    cw(0x1d, 6), // 55 '7'
    cw(0x1e, 6), // 56 '8'
    cw(0x1f, 6), // 57 '9'
    cw(0x5c, 7), // 58 ':'
    cw(0xfb, 8), // 59 ';'
    cw(0x7ffc, 15), // 60 '<'
    cw(0x20, 6), // 61 '='
    cw(0xffb, 12), // 62 '>'
    cw(0x3fc, 10), // 63 '?'
    cw(0x1ffa, 13), // 64 '@'
    cw(0x21, 6), // 65 'A'
    cw(0x5d, 7), // 66 'B'
    cw(0x5e, 7), // 67 'C'
    cw(0x5f, 7), // 68 'D'
    cw(0x60, 7), // 69 'E'
    cw(0x61, 7), // 70 'F'
    cw(0x62, 7), // 71 'G'
    cw(0x63, 7), // 72 'H'
    cw(0x64, 7), // 73 'I'
    cw(0x65, 7), // 74 'J'
    cw(0x66, 7), // 75 'K'
    cw(0x67, 7), // 76 'L'
    cw(0x68, 7), // 77 'M'
    cw(0x69, 7), // 78 'N'
    cw(0x6a, 7), // 79 'O'
    cw(0x6b, 7), // 80 'P'
    cw(0x6c, 7), // 81 'Q'
    cw(0x6d, 7), // 82 'R'
    cw(0x6e, 7), // 83 'S'
    cw(0x6f, 7), // 84 'T'
    cw(0x70, 7), // 85 'U'
    cw(0x71, 7), // 86 'V'
    cw(0x72, 7), // 87 'W'
    cw(0xfc, 8), // 88 'X'
    cw(0x73, 7), // 89 'Y'
    cw(0xfd, 8), // 90 'Z'
    cw(0x1ffb, 13), // 91 '['
    cw(0x7fff0, 19), // 92 '\\'
    cw(0x1ffc, 13), // 93 ']'
    cw(0x3ffc, 14), // 94 '^'
    cw(0x22, 6), // 95 '_'
    cw(0x7ffd, 15), // 96 '`'
    cw(0x3, 5), // 97 'a'
    cw(0x23, 6), // 98 'b'
    cw(0x4, 5), // 99 'c'
    cw(0x24, 6), // 100 'd'
    cw(0x5, 5), // 101 'e'
    cw(0x25, 6), // 102 'f'
    cw(0x26, 6), // 103 'g'
    cw(0x27, 6), // 104 'h'
    cw(0x6, 5), // 105 'i'
    cw(0x74, 7), // 106 'j'
    cw(0x75, 7), // 107 'k'
    cw(0x28, 6), // 108 'l'
    cw(0x29, 6), // 109 'm'
    cw(0x2a, 6), // 110 'n'
    cw(0x7, 5), // 111 'o'
    cw(0x2b, 6), // 112 'p'
    cw(0x76, 7), // 113 'q'
    cw(0x2c, 6), // 114 'r'
    cw(0x8, 5), // 115 's'
    cw(0x9, 5), // 116 't'
    cw(0x2d, 6), // 117 'u'
    cw(0x77, 7), // 118 'v'
    cw(0x78, 7), // 119 'w'
    cw(0x79, 7), // 120 'x'
    cw(0x7a, 7), // 121 'y'
    cw(0x7b, 7), // 122 'z'
    cw(0x7ffe, 15), // 123 '{'
    cw(0x7fc, 11), // 124 '|'
    cw(0x3ffd, 14), // 125 '}'
    cw(0x1ffd, 13), // 126 '~'
    cw(0xffffffc, 28), // 127
    cw(0xfffe6, 20), // 128
    cw(0x3fffd2, 22), // 129
    cw(0xfffe7, 20), // 130
    cw(0xfffe8, 20), // 131
    cw(0x3fffd3, 22), // 132
    cw(0x3fffd4, 22), // 133
    cw(0x3fffd5, 22), // 134
    cw(0x7fffd9, 23), // 135
    cw(0x3fffd6, 22), // 136
    cw(0x7fffda, 23), // 137
    cw(0x7fffdb, 23), // 138
    cw(0x7fffdc, 23), // 139
    cw(0x7fffdd, 23), // 140
    cw(0x7fffde, 23), // 141
    cw(0xffffeb, 24), // 142
    cw(0x7fffdf, 23), // 143
    cw(0xffffec, 24), // 144
    cw(0xffffed, 24), // 145
    cw(0x3fffd7, 22), // 146
    cw(0x7fffe0, 23), // 147
    cw(0xffffee, 24), // 148
    cw(0x7fffe1, 23), // 149
    cw(0x7fffe2, 23), // 150
    cw(0x7fffe3, 23), // 151
    cw(0x7fffe4, 23), // 152
    cw(0x1fffdc, 21), // 153
    cw(0x3fffd8, 22), // 154
    cw(0x7fffe5, 23), // 155
    cw(0x3fffd9, 22), // 156
    cw(0x7fffe6, 23), // 157
    cw(0x7fffe7, 23), // 158
    cw(0xffffef, 24), // 159
    cw(0x3fffda, 22), // 160
    cw(0x1fffdd, 21), // 161
    cw(0xfffe9, 20), // 162
    cw(0x3fffdb, 22), // 163
    cw(0x3fffdc, 22), // 164
    cw(0x7fffe8, 23), // 165
    cw(0x7fffe9, 23), // 166
    cw(0x1fffde, 21), // 167
    cw(0x7fffea, 23), // 168
    cw(0x3fffdd, 22), // 169
    cw(0x3fffde, 22), // 170
    cw(0xfffff0, 24), // 171
    cw(0x1fffdf, 21), // 172
    cw(0x3fffdf, 22), // 173
    cw(0x7fffeb, 23), // 174
    cw(0x7fffec, 23), // 175
    cw(0x1fffe0, 21), // 176
    cw(0x1fffe1, 21), // 177
    cw(0x3fffe0, 22), // 178
    cw(0x1fffe2, 21), // 179
    cw(0x7fffed, 23), // 180
    cw(0x3fffe1, 22), // 181
    cw(0x7fffee, 23), // 182
    cw(0x7fffef, 23), // 183
    cw(0xfffea, 20), // 184
    cw(0x3fffe2, 22), // 185
    cw(0x3fffe3, 22), // 186
    cw(0x3fffe4, 22), // 187
    cw(0x7ffff0, 23), // 188
    cw(0x3fffe5, 22), // 189
    cw(0x3fffe6, 22), // 190
    cw(0x7ffff1, 23), // 191
    cw(0x3ffffe0, 26), // 192
    cw(0x3ffffe1, 26), // 193
    cw(0xfffeb, 20), // 194
    cw(0x7fff1, 19), // 195
    cw(0x3fffe7, 22), // 196
    cw(0x7ffff2, 23), // 197
    cw(0x3fffe8, 22), // 198
    cw(0x1ffffec, 25), // 199
    cw(0x3ffffe2, 26), // 200
    cw(0x3ffffe3, 26), // 201
    cw(0x3ffffe4, 26), // 202
    cw(0x7ffffde, 27), // 203
    cw(0x7ffffdf, 27), // 204
    cw(0x3ffffe5, 26), // 205
    cw(0xfffff1, 24), // 206
    cw(0x1ffffed, 25), // 207
    cw(0x7fff2, 19), // 208
    cw(0x1fffe3, 21), // 209
    cw(0x3ffffe6, 26), // 210
    cw(0x7ffffe0, 27), // 211
    cw(0x7ffffe1, 27), // 212
    cw(0x3ffffe7, 26), // 213
    cw(0x7ffffe2, 27), // 214
    cw(0xfffff2, 24), // 215
    cw(0x1fffe4, 21), // 216
    cw(0x1fffe5, 21), // 217
    cw(0x3ffffe8, 26), // 218
    cw(0x3ffffe9, 26), // 219
    cw(0xffffffd, 28), // 220
    cw(0x7ffffe3, 27), // 221
    cw(0x7ffffe4, 27), // 222
    cw(0x7ffffe5, 27), // 223
    cw(0xfffec, 20), // 224
    cw(0xfffff3, 24), // 225
    cw(0xfffed, 20), // 226
    cw(0x1fffe6, 21), // 227
    cw(0x3fffe9, 22), // 228
    cw(0x1fffe7, 21), // 229
    cw(0x1fffe8, 21), // 230
    cw(0x7ffff3, 23), // 231
    cw(0x3fffea, 22), // 232
    cw(0x3fffeb, 22), // 233
    cw(0x1ffffee, 25), // 234
    cw(0x1ffffef, 25), // 235
    cw(0xfffff4, 24), // 236
    cw(0xfffff5, 24), // 237
    cw(0x3ffffea, 26), // 238
    cw(0x7ffff4, 23), // 239
    cw(0x3ffffeb, 26), // 240
    cw(0x7ffffe6, 27), // 241
    cw(0x3ffffec, 26), // 242
    cw(0x3ffffed, 26), // 243
    cw(0x7ffffe7, 27), // 244
    cw(0x7ffffe8, 27), // 245
    cw(0x7ffffe9, 27), // 246
    cw(0x7ffffea, 27), // 247
    cw(0x7ffffeb, 27), // 248
    cw(0xffffffe, 28), // 249
    cw(0x7ffffec, 27), // 250
    cw(0x7ffffed, 27), // 251
    cw(0x7ffffee, 27), // 252
    cw(0x7ffffef, 27), // 253
    cw(0x7fffff0, 27), // 254
    cw(0x3ffffee, 26), // 255
    EOS, // 256 EOS
];

/// Codeword for a byte value.
#[inline]
pub fn codeword(byte: u8) -> Codeword {
    CODEWORDS[byte as usize]
}

/// Code length in bits for a byte value.
#[inline]
pub fn code_len(byte: u8) -> u8 {
    CODEWORDS[byte as usize].nbits
}

/// Codeword for a symbol in `0..=256`, including EOS.
#[inline]
pub(crate) fn symbol(sym: usize) -> Codeword {
    CODEWORDS[sym]
}

/// Return the Huffman-encoded length of `data` in bytes.
///
/// This is the total code length rounded up to whole bytes; the final partial
/// byte absorbs the EOS padding, so no extra byte is ever needed.
pub fn encoded_len(data: &[u8]) -> usize {
    let bits: usize = data.iter().map(|&b| code_len(b) as usize).sum();
    bits.div_ceil(8)
}
