//! Built-in Stories - 内置故事数据
//!
//! 进程启动时加载，运行期间不变

use crate::domain::{Story, StoryError};

struct StorySeed {
    id: &'static str,
    title: &'static str,
    author: &'static str,
    cover_image: &'static str,
    pages: &'static [&'static str],
}

const STORIES: &[StorySeed] = &[
    StorySeed {
        id: "remy_rabbit",
        title: "Remy the Curious Rabbit",
        author: "RR",
        cover_image: "curious_rabbit.jpg",
        pages: &[
            "Once upon a time, in a cozy little cottage nestled in the woods, lived a curious rabbit named Remy.",
            "Remy loved to explore. One sunny morning, he found a shiny, golden key half-buried under an oak tree.",
            "He wondered, 'What does this key unlock?' His adventure was about to begin.",
            "The key fit a small, wooden box he'd never noticed before. Inside, there was a map with a single red 'X'.",
            "Remy's heart thumped with excitement. He packed a small bag with a carrot and set off on his grand adventure.",
            "After a long journey, he found the 'X' marked spot. It was a giant, ancient tree with a hidden door. The end.",
        ],
    },
    StorySeed {
        id: "space_cat",
        title: "A Cat in Space",
        author: "LS",
        cover_image: "cat_in_space.jpg",
        pages: &[
            "Meet Whiskers, a cat with dreams as vast as the cosmos. One night, a tiny alien ship landed in his backyard.",
            "The aliens, friendly and purple, invited Whiskers for a ride. He packed his favorite tuna and hopped aboard.",
            "They soared past stars and nebulae, Whiskers gazing out with wide, wondering eyes.",
            "On a distant planet made of yarn balls, he played with adorable alien kittens. It was the best day ever!",
            "Finally, the purple aliens brought Whiskers home, leaving him with stardust in his fur and stories to tell. The end.",
        ],
    },
    StorySeed {
        id: "magic_forest",
        title: "The Whispering Forest",
        author: "Tales",
        cover_image: "whispering_forest.jpg",
        pages: &[
            "Elara was a young girl who stumbled upon a shimmering path leading into the Whispering Forest.",
            "Trees there had leaves that glowed, and flowers sang gentle lullabies. Magical creatures peeked from behind ancient trunks.",
            "She met a grumpy gnome who guarded a crystal spring. He offered her a sip of its sparkling water.",
            "With each sip, Elara felt a little wiser. The forest seemed to share its ancient secrets with her.",
            "As dusk fell, Elara returned home, her heart full of wonder and her pockets jingling with enchanted pebbles. The end.",
        ],
    },
];

/// 构建内置故事列表（按展示顺序）
pub fn builtin_stories() -> Result<Vec<Story>, StoryError> {
    STORIES
        .iter()
        .map(|seed| {
            Story::new(
                seed.id,
                seed.title,
                seed.author,
                seed.cover_image,
                seed.pages.iter().map(|page| page.to_string()).collect(),
            )
        })
        .collect()
}
