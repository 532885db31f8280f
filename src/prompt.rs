use serde::{Deserialize, Serialize};

/// Which of the two transformation modes is active for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Miyazaki dialect -> standard Japanese
    ToStandard,
    /// Standard Japanese -> Miyazaki dialect
    ToDialect,
}

const TO_STANDARD_TEMPLATE: &str = r#"あなたは宮崎県の方言（宮崎弁）を標準的な日本語に翻訳する専門家です。以下の指示に従って翻訳してください。

# 宮崎弁の特徴
- 「〜ちょる」「〜ごつ」「〜ごわす」などの特徴的な語尾
- 「〜と」「〜とよ」「〜とね」などの文末表現
- 「おいどん」（私）、「あんた」（あなた）などの人称代名詞
- 「ごっつぉ」（ごちそう）、「おやっとさぁ」（お疲れ様）などの特有の語彙
- 「せんといかん」（しなければならない）のような義務表現
- 「〜ちゃ」「〜やっちゃ」などの疑問形
- 「〜やった」「〜やろ」などの過去形・推量形

# 翻訳の際の注意点
1. 宮崎弁特有の語彙や表現を正確に理解する
2. 文脈を考慮して適切な標準語に変換する
3. 話者の意図や感情のニュアンスを保持する
4. 敬語表現や世代差を考慮する
5. 地域による微妙な方言の違いを考慮する（県北部と南部で異なる場合がある）

# 翻訳例
- 「おはようごわす」→「おはようございます」
- 「あんたんとこに行くとよ」→「あなたの家に行きますよ」
- 「そげんことせんでよかが」→「そんなことしなくていいですか」
- 「めっちゃよかとこやね」→「とても良いところですね」
- 「おいどんが行っちょく」→「私が行っておきます」
- 「なんごつしよっと？」→「何をしているの？」

以下の宮崎弁を上記の知識を活用して、自然で正確な標準語に翻訳してください。翻訳のみを返し、説明は不要です。

宮崎弁: {text}"#;

const TO_DIALECT_TEMPLATE: &str = r#"あなたは標準的な日本語を宮崎県の方言（宮崎弁）に翻訳する専門家です。以下の指示に従って翻訳してください。

日常会話でよく使われる表現
てげ：とても、すごく（例：「てげうまい」＝とても美味しい）
いっちゃが：いいよ、かまわないよ
よだきい：面倒くさい、だるい
ひんだれた：疲れた
しちりん：バカ
ぐらしー：かわいそう
ちょこばいー：くすぐったい
じゃーじゃー：そうだそうだ
せからしか：うるさい、わずらわしい
ちゅんて：冷たい

地域特有の表現（日南地方など）
あたれ：もったいない
あつがん：熱いお風呂が好きな人
いっかすっ：教える
うてなう：相手をする
おっしょる：折る
くらす：殴る
こぶ：蜘蛛
さるく：歩き回る
しとっちょんない：全然ない
たまがる：驚く

その他の特徴的な表現
あいがとぐわした：ありがとう
あせくる：かきまわす、いじくる
あば：新しい
あんべらしゅー：あんばい良く
いたぐら：あぐら
うっせる：捨てる
えーら：あらまあ
つ：かさぶた
はめっくい：一生懸命
ぴ：とげ

# 翻訳例
- 「おはようございます」→「おはようごわす」
- 「とても美味しいですね」→「てげうまいね」
- 「ありがとうございます」→「あいがとぐわした」
- 「面倒くさいな」→「よだきいね」
- 「全然ないよ」→「しとっちょんなか」
- 「疲れた」→「ひんだれた」

以下の標準語を上記の知識を活用して、自然で親しみやすい宮崎弁に翻訳してください。翻訳のみを返し、説明は不要です。

標準語: {text}"#;

/// Mapping from direction to instructional template.
///
/// Templates are configuration data so they can be swapped or localized
/// without touching request logic. Each contains a role description, a
/// dialect glossary, worked examples, and a `{text}` placeholder for the
/// user input.
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    to_standard: String,
    to_dialect: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            to_standard: TO_STANDARD_TEMPLATE.to_string(),
            to_dialect: TO_DIALECT_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn new(to_standard: String, to_dialect: String) -> Self {
        Self {
            to_standard,
            to_dialect,
        }
    }

    fn template(&self, direction: Direction) -> &str {
        match direction {
            Direction::ToStandard => &self.to_standard,
            Direction::ToDialect => &self.to_dialect,
        }
    }

    /// Interpolate `text` into the template for `direction`.
    ///
    /// Pure function of its inputs. Callers are responsible for rejecting
    /// empty input before building a prompt.
    pub fn build(&self, direction: Direction, text: &str) -> String {
        self.template(direction).replace("{text}", text)
    }
}
